//! Boundary resolution contract.
//!
//! A tap detector asks its resolver for the hit rectangle of a target once,
//! at touch start, and keeps that answer for the whole attempt. Platforms
//! usually only know how to measure an element and read its inset; wrapping
//! such an [`ElementGeometry`] in an [`InsetResolver`] applies the inset rule
//! the same way everywhere.

use crate::error::TapError;
use tapwire_geometry::{Boundary, EdgeInsets};

/// Produces the hit-test rectangle for a touch target.
pub trait BoundaryResolver<T> {
    fn resolve(&self, target: &T) -> Result<Boundary, TapError>;
}

impl<T, F> BoundaryResolver<T> for F
where
    F: Fn(&T) -> Result<Boundary, TapError>,
{
    fn resolve(&self, target: &T) -> Result<Boundary, TapError> {
        self(target)
    }
}

/// Raw element measurements a platform can provide.
pub trait ElementGeometry<T> {
    /// The element's own rectangle, in touch point coordinates.
    fn native_bounds(&self, target: &T) -> Result<Boundary, TapError>;

    /// The element's declared inset, or `None` when it declares none.
    fn inset(&self, target: &T) -> Result<Option<f32>, TapError>;
}

/// Grows `native` by `inset` on every side. Negative insets shrink it and a
/// missing inset leaves it untouched.
pub fn apply_inset(native: Boundary, inset: Option<f32>) -> Boundary {
    match inset {
        Some(inset) => native.inflate(EdgeInsets::uniform(inset)),
        None => native,
    }
}

/// [`BoundaryResolver`] combining native bounds with the element's inset.
#[derive(Clone, Debug, Default)]
pub struct InsetResolver<G> {
    geometry: G,
}

impl<G> InsetResolver<G> {
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }
}

impl<T, G> BoundaryResolver<T> for InsetResolver<G>
where
    G: ElementGeometry<T>,
{
    fn resolve(&self, target: &T) -> Result<Boundary, TapError> {
        let native = self.geometry.native_bounds(target)?;
        let inset = self.geometry.inset(target)?;
        Ok(apply_inset(native, inset))
    }
}
