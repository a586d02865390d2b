//! Build shapes from CLI arguments and collect their measurements.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use shapes::{Circle, Figure, Polygon, Triangle};

/// One measured shape, as printed to stdout and written to `--out`.
#[derive(Debug, Serialize)]
pub struct Measurement {
    pub shape: &'static str,
    pub params: Value,
    /// `None` when the area overflowed to `+∞` (JSON has no infinity).
    pub area: Option<f32>,
    pub area_finite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_right_angle: Option<bool>,
}

impl Measurement {
    fn new(shape: &'static str, params: Value, area: f32) -> Self {
        let area_finite = area.is_finite();
        Self {
            shape,
            params,
            area: area_finite.then_some(area),
            area_finite,
            has_right_angle: None,
        }
    }
}

pub fn circle(radius: f32) -> Result<Measurement> {
    let c = Circle::new(radius).with_context(|| format!("invalid circle (radius={radius})"))?;
    Ok(Measurement::new(
        "circle",
        json!({ "radius": c.radius() }),
        c.area(),
    ))
}

pub fn triangle([a, b, c]: [f32; 3]) -> Result<Measurement> {
    let t = Triangle::new(a, b, c)
        .with_context(|| format!("invalid triangle (sides={a}, {b}, {c})"))?;
    let mut m = Measurement::new("triangle", json!({ "sides": t.sides() }), t.area());
    m.has_right_angle = Some(t.has_right_angle());
    Ok(m)
}
