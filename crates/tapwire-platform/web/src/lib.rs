//! Browser adapter for tapwire.
//!
//! [`WebTouchSource`] turns DOM touch events into tapwire notifications and
//! [`DomGeometry`] resolves tap boundaries from element layout. Use
//! [`tap_detector`] to wire both into a detector.

mod geometry;
mod options;
mod source;

pub use geometry::{parse_inset, DomGeometry};
pub use options::WebTapOptions;
pub use source::WebTouchSource;

use tapwire_core::{InsetResolver, TapConfig, TapError, TapGestureDetector};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Builds a detector over `source` that reads boundaries from the DOM.
pub fn tap_detector(
    source: &WebTouchSource,
    options: &WebTapOptions,
    config: TapConfig,
) -> TapGestureDetector<Element> {
    TapGestureDetector::new(
        source.source(),
        InsetResolver::new(DomGeometry::new(options.clone())),
        config,
    )
}

pub(crate) fn platform_error(context: &str, err: JsValue) -> TapError {
    TapError::Platform {
        reason: format!("{context}: {err:?}"),
    }
}
