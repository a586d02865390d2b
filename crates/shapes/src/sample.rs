//! Reproducible random shapes (replay tokens + side ranges).
//!
//! Purpose
//! - Feed benches and randomized tests with valid circles and triangles that
//!   can be regenerated exactly from a `(seed, index)` pair.
//!
//! Model
//! - Circle: radius uniform in `[min, max]`.
//! - Triangle: two sides uniform in `[min, max]`, the third placed strictly
//!   inside the interval left open by the triangle inequality (and the range).
//! - Draws still go through the validating constructors, so a sample is never
//!   an invalid shape; rounding at extreme ranges surfaces as `Err`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::triangle::Triangle;

/// Smallest lower bound a range is clamped to.
const MIN_LENGTH: f32 = 1e-6;
/// Upper clamp, keeps `max - min` and `a + b` finite for the uniform sampler.
const MAX_LENGTH: f32 = f32::MAX / 4.0;

/// Inclusive range for radii and sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideRange {
    pub min: f32,
    pub max: f32,
}

impl Default for SideRange {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 100.0,
        }
    }
}

impl SideRange {
    /// Clamp to a usable, non-empty range. NaN bounds fall back to the clamps.
    fn bounds(self) -> (f32, f32) {
        let lo = self.min.max(MIN_LENGTH).min(MAX_LENGTH / 2.0);
        let hi = self.max.min(MAX_LENGTH).max(lo * 2.0);
        (lo, hi)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Next token in the same stream.
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn rng(self) -> StdRng {
        // SplitMix64 finalizer over both halves of the token.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a circle with radius in `range`.
pub fn draw_circle(range: SideRange, tok: ReplayToken) -> Result<Circle, ShapeError> {
    let (lo, hi) = range.bounds();
    let mut rng = tok.rng();
    Circle::new(rng.gen_range(lo..=hi))
}

/// Draw a non-degenerate triangle with sides in `range`.
///
/// The third side lands in the middle 90% of the admissible interval, so the
/// triangle inequality holds with margin except at extreme range ratios.
pub fn draw_triangle(range: SideRange, tok: ReplayToken) -> Result<Triangle, ShapeError> {
    let (lo, hi) = range.bounds();
    let mut rng = tok.rng();
    let a: f32 = rng.gen_range(lo..=hi);
    let b: f32 = rng.gen_range(lo..=hi);
    let c_lo = (a - b).abs().max(lo);
    let c_hi = (a + b).min(hi);
    let t: f32 = rng.gen_range(0.05..0.95);
    let c = c_lo + (c_hi - c_lo) * t;
    Triangle::new(a, b, c)
}

/// Right triangle with the given legs; hypotenuse via `hypot`.
///
/// `has_right_angle` holds as long as the rounding of the squared sides stays
/// under `TOLERANCE`, i.e. for legs of moderate size.
pub fn right_triangle(leg_a: f32, leg_b: f32) -> Result<Triangle, ShapeError> {
    Triangle::new(leg_a, leg_b, leg_a.hypot(leg_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::figure::{Figure, Polygon};

    #[test]
    fn same_token_same_shape() {
        let tok = ReplayToken::new(42, 7);
        let a = draw_triangle(SideRange::default(), tok).unwrap();
        let b = draw_triangle(SideRange::default(), tok).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.area().to_bits(), b.area().to_bits());

        let c1 = draw_circle(SideRange::default(), tok).unwrap();
        let c2 = draw_circle(SideRange::default(), tok).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn different_indices_differ() {
        let tok = ReplayToken::new(1, 0);
        let a = draw_triangle(SideRange::default(), tok).unwrap();
        let b = draw_triangle(SideRange::default(), tok.advance()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn draws_are_valid_and_in_range() {
        let range = SideRange::default();
        let mut tok = ReplayToken::new(2024, 0);
        for _ in 0..256 {
            let t = draw_triangle(range, tok).unwrap();
            assert!(t.min_side() >= range.min);
            assert!(t.max_side() <= range.max);
            assert!(t.max_side() < t.mid_side() + t.min_side());
            assert!(t.area() > 0.0 && t.area().is_finite());

            let c = draw_circle(range, tok).unwrap();
            assert!(c.radius() >= range.min && c.radius() <= range.max);
            tok = tok.advance();
        }
    }

    #[test]
    fn degenerate_ranges_are_clamped() {
        let tok = ReplayToken::new(3, 3);
        for range in [
            SideRange { min: -5.0, max: -1.0 },
            SideRange { min: 10.0, max: 1.0 },
            SideRange { min: f32::NAN, max: f32::NAN },
            SideRange { min: 1.0, max: f32::INFINITY },
        ] {
            assert!(draw_circle(range, tok).is_ok(), "{range:?}");
        }
    }

    #[test]
    fn right_triangles_have_right_angles() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let a: f32 = rng.gen_range(0.5..2.0);
            let b: f32 = rng.gen_range(0.5..2.0);
            let t = right_triangle(a, b).unwrap();
            assert!(t.has_right_angle(), "legs ({a}, {b})");
        }
        let t = right_triangle(3.0, 4.0).unwrap();
        assert_eq!(t.max_side(), 5.0);
        assert_eq!(t.area(), 6.0);
    }

    #[test]
    fn right_triangle_rejects_bad_legs() {
        assert_eq!(right_triangle(0.0, 1.0).unwrap_err().kind(), ErrorKind::ZeroValue);
        assert_eq!(right_triangle(-1.0, 1.0).unwrap_err().kind(), ErrorKind::NegativeValue);
    }
}
