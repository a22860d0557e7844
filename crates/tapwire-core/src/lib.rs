//! Tap gesture recognition over push-based touch signal streams.
//!
//! A [`TapGestureDetector`] listens to a [`TouchSource`] and derives three
//! streams from it: `ping` when a touch starts, `ped` when it completes as a
//! tap, and `cancel` when it drifts out of its element's boundary or the
//! platform cancels it. Moves with more than one finger are ignored.

pub mod config;
pub mod error;
pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod platform;
pub mod race;
pub mod signal;

pub use config::{ConfirmPolicy, TapConfig, TapTimeout, TimeoutOutcome};
pub use error::TapError;
pub use gestures::{
    apply_inset, is_single_finger, is_tap_intention, BoundaryResolver, CancelReason,
    ElementGeometry, InsetResolver, TapCancellation, TapGestureDetector,
};
pub use input::{
    TouchDispatcher, TouchNotification, TouchPhase, TouchPoint, TouchPoints, TouchSource,
    TouchTarget,
};
pub use platform::{Clock, SystemClock};
pub use race::Race;
pub use signal::{Signal, Subscription};
pub use tapwire_geometry::{Boundary, EdgeInsets, Point};
pub use web_time::Instant;

pub mod prelude {
    pub use crate::config::{ConfirmPolicy, TapConfig};
    pub use crate::error::TapError;
    pub use crate::gestures::{BoundaryResolver, TapGestureDetector};
    pub use crate::input::prelude::*;
    pub use crate::signal::{Signal, Subscription};
    pub use tapwire_geometry::Boundary;
}
