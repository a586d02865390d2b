//! Strict geometric value objects: circles and triangles.
//!
//! Purpose
//! - Fail-fast construction: every shape validates its lengths up front and
//!   either exists fully or not at all (`Result<_, ShapeError>`).
//! - Derived measurements (area, right-angle flag) are computed lazily on
//!   first access and memoized for the lifetime of the value.
//! - Single precision (`f32`) throughout. Underflow to `0` and overflow to
//!   `+∞` in derived values are valid results, not errors.
//!
//! Layout
//! - `consts`: shared `PI` and `TOLERANCE`.
//! - `error`: `ShapeError` taxonomy and the per-length validation rule.
//! - `figure`: `Figure` / `Polygon` capability traits.
//! - `circle`, `triangle`: the two concrete shapes.
//! - `sample`: reproducible draws of valid shapes for benches and tests.

pub mod circle;
pub mod consts;
pub mod error;
pub mod figure;
pub mod sample;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::Circle;
pub use error::{ErrorKind, ShapeError};
pub use figure::{Figure, Polygon};
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::consts::{approx_eq, PI, TOLERANCE};
    pub use crate::sample::{draw_circle, draw_triangle, right_triangle, ReplayToken, SideRange};
    pub use crate::{Circle, ErrorKind, Figure, Polygon, ShapeError, Triangle};
}
