//! Circle defined by its radius.

use std::fmt;
use std::sync::OnceLock;

use crate::consts::PI;
use crate::error::{check_length, ShapeError};
use crate::figure::Figure;

/// Circle with a strictly positive, finite radius.
///
/// Invariants:
/// - `0 < radius < +∞`, fixed after construction.
/// - `area` is an empty cache until the first `Figure::area` call.
#[derive(Clone, Debug)]
pub struct Circle {
    radius: f32,
    area: OnceLock<f32>,
}

impl Circle {
    /// Validate `radius` and build the circle.
    ///
    /// Checks in order: zero, infinity, negative, NaN.
    pub fn new(radius: f32) -> Result<Self, ShapeError> {
        check_length("radius", radius)?;
        Ok(Self {
            radius,
            area: OnceLock::new(),
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Figure for Circle {
    /// `π r²` at `f32`; tiny radii underflow to `0`, huge ones overflow to `+∞`.
    fn area(&self) -> f32 {
        *self.area.get_or_init(|| PI * self.radius * self.radius)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(r={})", self.radius)
    }
}
