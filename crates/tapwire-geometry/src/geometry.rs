//! Geometric primitives: Point, EdgeInsets, Boundary

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Margin values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }
}

/// Axis-aligned hit-test rectangle expressed by its four edges.
///
/// Platforms hand back bounding rects in this edge-based form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Boundary {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Boundary {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Grows every edge outward by the matching inset. Negative insets shrink.
    pub fn inflate(&self, insets: EdgeInsets) -> Self {
        Self {
            top: self.top - insets.top,
            right: self.right + insets.right,
            bottom: self.bottom + insets.bottom,
            left: self.left - insets.left,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
            left: self.left + dx,
        }
    }

    /// Strict containment: a point lying exactly on an edge is outside.
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
