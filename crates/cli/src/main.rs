use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod measure;
mod provenance;

use measure::Measurement;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Measure circles and triangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area of a circle
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        radius: f32,
        /// Also write the result (plus a provenance sidecar) to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Area and right-angle check of a triangle
    Triangle {
        #[arg(long, num_args = 3, value_names = ["A", "B", "C"], allow_hyphen_values = true)]
        sides: Vec<f32>,
        /// Also write the result (plus a provenance sidecar) to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Circle { radius, out } => {
            tracing::info!(radius, "circle");
            emit(measure::circle(radius), out.as_deref())
        }
        Action::Triangle { sides, out } => {
            tracing::info!(sides = ?sides, "triangle");
            let sides: [f32; 3] = sides
                .try_into()
                .map_err(|v: Vec<f32>| anyhow::anyhow!("expected 3 sides, got {}", v.len()))?;
            emit(measure::triangle(sides), out.as_deref())
        }
        Action::Report => report(),
    }
}

fn emit(measured: Result<Measurement>, out: Option<&Path>) -> Result<()> {
    let m = measured.inspect_err(|e| tracing::warn!("rejected: {e:#}"))?;
    tracing::info!(shape = m.shape, area = ?m.area, has_right_angle = ?m.has_right_angle, "measured");
    println!("{}", serde_json::to_string_pretty(&m)?);

    if let Some(out) = out {
        provenance::ensure_parent(out)?;
        std::fs::write(out, serde_json::to_vec_pretty(&m)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let sidecar = provenance::write_sidecar(out, json!({ "shape": m.shape, "input": m.params }))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    }
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::Provenance::new(json!({}));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_values_reach_the_shape() {
        let cmd = Cmd::try_parse_from(["cli", "circle", "--radius", "-inf"]).unwrap();
        match cmd.action {
            Action::Circle { radius, out } => {
                assert_eq!(radius, f32::NEG_INFINITY);
                assert!(out.is_none());
                let err = measure::circle(radius).unwrap_err();
                assert!(format!("{err:#}").contains("radius must not be infinity"));
            }
            _ => panic!("expected circle"),
        }

        let cmd =
            Cmd::try_parse_from(["cli", "triangle", "--sides", "1", "-1e-3", "1"]).unwrap();
        match cmd.action {
            Action::Triangle { sides, .. } => assert_eq!(sides, vec![1.0, -1e-3, 1.0]),
            _ => panic!("expected triangle"),
        }
    }

    #[test]
    fn out_flag_after_sides() {
        let cmd = Cmd::try_parse_from([
            "cli", "triangle", "--sides", "3", "-inf", "5", "--out", "r.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Triangle { sides, out } => {
                assert_eq!(sides.len(), 3);
                assert_eq!(sides[1], f32::NEG_INFINITY);
                assert_eq!(out.as_deref(), Some(Path::new("r.json")));
            }
            _ => panic!("expected triangle"),
        }
    }

    #[test]
    fn wrong_side_count_is_a_usage_error() {
        assert!(Cmd::try_parse_from(["cli", "triangle", "--sides", "1", "2"]).is_err());
    }
}
