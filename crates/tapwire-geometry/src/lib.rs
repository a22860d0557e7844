//! Pure geometry for tapwire
//!
//! Points, insets and the hit-test `Boundary` shared by the
//! gesture core and the platform adapters.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Boundary, EdgeInsets, Point};
}
