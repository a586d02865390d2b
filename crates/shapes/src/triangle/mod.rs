//! Triangle defined by three side lengths.
//!
//! Sides are stored sorted (`min ≤ mid ≤ max`) so every derived value is
//! independent of the order the caller passed them in.

use std::fmt;
use std::sync::OnceLock;

use crate::consts::{approx_eq, TOLERANCE};
use crate::error::{check_length, ShapeError};
use crate::figure::{Figure, Polygon};

/// Non-degenerate triangle with strictly positive, finite sides.
///
/// Invariants:
/// - `0 < min_side ≤ mid_side ≤ max_side < +∞`.
/// - `max_side < perimeter - max_side` (strict triangle inequality).
/// - `perimeter` is computed once at construction; `area` and
///   `right_angle` are empty caches until first queried.
#[derive(Clone, Debug)]
pub struct Triangle {
    min_side: f32,
    mid_side: f32,
    max_side: f32,
    perimeter: f32,
    area: OnceLock<f32>,
    right_angle: OnceLock<bool>,
}

impl Triangle {
    /// Validate the sides and build the triangle.
    ///
    /// Each side is checked in input order (zero, infinity, negative, NaN);
    /// the first failing side wins. Only then is the triangle inequality
    /// checked on the sorted sides.
    pub fn new(side1: f32, side2: f32, side3: f32) -> Result<Self, ShapeError> {
        let mut sides = [side1, side2, side3];
        for side in sides {
            check_length("side", side)?;
        }
        sides.sort_by(f32::total_cmp);
        let [min_side, mid_side, max_side] = sides;

        let perimeter = max_side + mid_side + min_side;
        let rest = perimeter - max_side;
        if max_side >= rest {
            return Err(ShapeError::InvalidCombination { max_side, rest });
        }

        Ok(Self {
            min_side,
            mid_side,
            max_side,
            perimeter,
            area: OnceLock::new(),
            right_angle: OnceLock::new(),
        })
    }

    /// Shortest side.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.min_side
    }

    /// Middle side.
    #[inline]
    pub fn mid_side(&self) -> f32 {
        self.mid_side
    }

    /// Longest side.
    #[inline]
    pub fn max_side(&self) -> f32 {
        self.max_side
    }

    /// Sum of the sides, fixed at construction.
    #[inline]
    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    /// Sides in ascending order.
    #[inline]
    pub fn sides(&self) -> [f32; 3] {
        [self.min_side, self.mid_side, self.max_side]
    }
}

impl Figure for Triangle {
    /// Heron's formula at `f32`. Extreme sides may give `0` or `+∞`.
    fn area(&self) -> f32 {
        *self.area.get_or_init(|| {
            let half = self.perimeter / 2.0;
            (half * (half - self.max_side) * (half - self.mid_side) * (half - self.min_side)).sqrt()
        })
    }
}

impl Polygon for Triangle {
    /// `|max² − mid² − min²| < TOLERANCE`.
    fn has_right_angle(&self) -> bool {
        *self.right_angle.get_or_init(|| {
            let excess = self.max_side * self.max_side - self.mid_side * self.mid_side;
            approx_eq(excess, self.min_side * self.min_side, TOLERANCE)
        })
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sides() == other.sides()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle({}, {}, {})",
            self.min_side, self.mid_side, self.max_side
        )
    }
}
