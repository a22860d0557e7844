pub mod boundary;
pub mod predicates;
pub mod tap;

pub use boundary::{apply_inset, BoundaryResolver, ElementGeometry, InsetResolver};
pub use predicates::{is_single_finger, is_tap_intention};
pub use tap::{CancelReason, TapCancellation, TapGestureDetector};
