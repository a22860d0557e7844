use crate::options::WebTapOptions;
use crate::platform_error;
use tapwire_core::{ElementGeometry, TapError};
use tapwire_geometry::Boundary;
use web_sys::Element;

/// Reads element bounds and insets from the live DOM.
#[derive(Clone, Debug, Default)]
pub struct DomGeometry {
    options: WebTapOptions,
}

impl DomGeometry {
    pub fn new(options: WebTapOptions) -> Self {
        Self { options }
    }
}

impl ElementGeometry<Element> for DomGeometry {
    fn native_bounds(&self, target: &Element) -> Result<Boundary, TapError> {
        let rect = target.get_bounding_client_rect();
        let client = Boundary::new(
            rect.top() as f32,
            rect.right() as f32,
            rect.bottom() as f32,
            rect.left() as f32,
        );
        if !self.options.page_coordinates {
            return Ok(client);
        }

        let window = web_sys::window().ok_or_else(|| TapError::Platform {
            reason: "no global window exists".to_string(),
        })?;
        let scroll_x = window
            .scroll_x()
            .map_err(|err| platform_error("reading scrollX", err))?;
        let scroll_y = window
            .scroll_y()
            .map_err(|err| platform_error("reading scrollY", err))?;
        Ok(client.translate(scroll_x as f32, scroll_y as f32))
    }

    fn inset(&self, target: &Element) -> Result<Option<f32>, TapError> {
        let raw = target.get_attribute(&self.options.inset_attribute);
        parse_inset(&describe(target), raw.as_deref())
    }
}

/// Parses an inset attribute value.
///
/// A missing attribute means no inset. Anything present must be a finite
/// number of CSS pixels, surrounding whitespace allowed.
pub fn parse_inset(target: &str, raw: Option<&str>) -> Result<Option<f32>, TapError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(TapError::InvalidInset {
            target: target.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Short selector-like label for logs and errors, e.g. `button#save`.
pub(crate) fn describe(element: &Element) -> String {
    let tag = element.tag_name().to_lowercase();
    let id = element.id();
    if id.is_empty() {
        tag
    } else {
        format!("{tag}#{id}")
    }
}
