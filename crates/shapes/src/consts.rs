//! Numeric constants shared by all shapes.
//!
//! Policy
//! - Fixed constants, not runtime configuration. Every comparison that cannot
//!   rely on exact float equality goes through `TOLERANCE`.

/// π at single precision.
pub const PI: f32 = std::f32::consts::PI;

/// Absolute tolerance for float comparisons (right-angle check, test equality).
///
/// Absorbs the rounding of squared sides at `f32`, e.g. `(2.1, 2.8, 3.5)` or
/// `(1, 1, 1.4142135)`, while rejecting clearly non-right triangles.
pub const TOLERANCE: f32 = 1e-5;

/// `|a - b| < eps`.
#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}
