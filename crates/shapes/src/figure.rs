//! Capability traits implemented by the concrete shapes.

/// Anything with an area.
pub trait Figure {
    /// Area of the figure. Computed on first call, cached afterwards.
    fn area(&self) -> f32;
}

/// A figure bounded by straight sides.
pub trait Polygon: Figure {
    /// `true` if one of the interior angles is right (within `TOLERANCE`).
    fn has_right_angle(&self) -> bool;
}
