use tapwire_core::gesture_constants::DEFAULT_INSET_ATTRIBUTE;

/// Browser-side settings shared by the touch source and the geometry lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct WebTapOptions {
    /// Attribute holding the per-element inset, in CSS pixels.
    pub inset_attribute: String,
    /// Use `pageX`/`pageY` and scroll-adjusted bounds. When off, both points
    /// and bounds stay in viewport (client) space.
    pub page_coordinates: bool,
}

impl Default for WebTapOptions {
    fn default() -> Self {
        Self {
            inset_attribute: DEFAULT_INSET_ATTRIBUTE.to_string(),
            page_coordinates: true,
        }
    }
}

impl WebTapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inset_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.inset_attribute = attribute.into();
        self
    }

    pub fn with_page_coordinates(mut self, enabled: bool) -> Self {
        self.page_coordinates = enabled;
        self
    }
}
