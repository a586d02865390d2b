//! Construction errors.
//!
//! Validation only happens at construction; a successfully built shape has no
//! failure modes left.

use std::fmt;

/// Why a shape could not be constructed.
///
/// `param` names the offending constructor argument (`"radius"`, `"side"`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeError {
    /// A length is exactly zero (`-0.0` included).
    ZeroValue { param: &'static str },
    /// A length is negative.
    NegativeValue { param: &'static str },
    /// A length is `+∞` or `-∞`.
    InfiniteValue { param: &'static str },
    /// A length is NaN.
    NotANumber { param: &'static str },
    /// Individually valid sides that cannot close a triangle
    /// (`max_side >= rest`, degenerate equality included).
    InvalidCombination { max_side: f32, rest: f32 },
}

/// Plain tag of a [`ShapeError`], handy for matching without payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ZeroValue,
    NegativeValue,
    InfiniteValue,
    NotANumber,
    InvalidCombination,
}

impl ShapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroValue { .. } => ErrorKind::ZeroValue,
            Self::NegativeValue { .. } => ErrorKind::NegativeValue,
            Self::InfiniteValue { .. } => ErrorKind::InfiniteValue,
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::InvalidCombination { .. } => ErrorKind::InvalidCombination,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroValue { param } => write!(f, "{param} must not be zero"),
            Self::NegativeValue { param } => write!(f, "{param} must not be negative"),
            Self::InfiniteValue { param } => write!(f, "{param} must not be infinity"),
            Self::NotANumber { param } => write!(f, "{param} must be a number (got NaN)"),
            Self::InvalidCombination { max_side, rest } => write!(
                f,
                "max side of triangle ({max_side}) must be less than the sum of the other sides ({rest})"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Check a single length: zero, then infinity, then negative, then NaN.
///
/// The order matters: `-∞` reports as infinite, not negative.
pub(crate) fn check_length(param: &'static str, value: f32) -> Result<(), ShapeError> {
    if value == 0.0 {
        return Err(ShapeError::ZeroValue { param });
    }
    if value.is_infinite() {
        return Err(ShapeError::InfiniteValue { param });
    }
    if value < 0.0 {
        return Err(ShapeError::NegativeValue { param });
    }
    if value.is_nan() {
        return Err(ShapeError::NotANumber { param });
    }
    Ok(())
}
