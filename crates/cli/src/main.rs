use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use convexfit::prelude::*;
use nalgebra::vector;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod args;

use args::{parse_points, parse_polygon};

#[derive(Parser)]
#[command(name = "convexfit")]
#[command(about = "Convex polygon collision, containment and enclosing-scale search")]
#[command(version = convexfit::VERSION)]
struct Cmd {
    /// Log search progress (debug level) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report whether a polygon is convex and clockwise
    Check {
        /// Polygon as "x,y;x,y;..."
        polygon: String,
    },
    /// Report whether two polygons overlap
    Collide { a: String, b: String },
    /// Report whether every inner polygon lies strictly inside the outer one
    Contain {
        #[arg(long = "inner", required = true)]
        inner: Vec<String>,
        #[arg(long)]
        outer: String,
    },
    /// Smallest outer scale that strictly contains the inner polygon
    Fit {
        #[arg(long)]
        inner: String,
        #[arg(long)]
        outer: String,
        #[arg(long, value_enum, default_value_t = Mode::Translation)]
        mode: Mode,
        /// Decimal digits of the scale search
        #[arg(long, default_value_t = 4)]
        precision: u32,
        /// Random translation probes (translation mode)
        #[arg(long, default_value_t = 20)]
        iterations: usize,
        /// RNG seed (translation mode); unseeded when absent
        #[arg(long)]
        seed: Option<u64>,
        /// Inner centre "x,y" for the rotation sweep; defaults to the outer centroid
        #[arg(long)]
        at: Option<String>,
        /// Skip the convexity/winding gate
        #[arg(long)]
        allow_nonconvex: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Scale,
    Rotation,
    Translation,
}

#[derive(Serialize)]
struct FitReport {
    mode: &'static str,
    scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    centre: Option<[f64; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Check { polygon } => check(&polygon),
        Action::Collide { a, b } => collide(&a, &b),
        Action::Contain { inner, outer } => contain(&inner, &outer),
        Action::Fit {
            inner,
            outer,
            mode,
            precision,
            iterations,
            seed,
            at,
            allow_nonconvex,
        } => {
            let cfg = SearchCfg {
                require_convex: !allow_nonconvex,
                ..SearchCfg::with_precision(precision)
            };
            fit(&inner, &outer, mode, &cfg, iterations, seed, at.as_deref())
        }
    }
}

/// Parse a polygon argument and warn when SAT verdicts would be unreliable.
fn load(role: &str, text: &str) -> Result<Polygon> {
    let poly = parse_polygon(text).with_context(|| format!("{role} polygon"))?;
    if !poly.is_convex() {
        tracing::warn!(role, "polygon is not convex or not clockwise; results may be wrong");
    }
    Ok(poly)
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn check(text: &str) -> Result<()> {
    let poly = parse_polygon(text)?;
    let c = poly.centre();
    emit(&serde_json::json!({
        "vertices": poly.len(),
        "convex": poly.is_convex(),
        "centre": [c.x, c.y],
    }))
}

fn collide(a: &str, b: &str) -> Result<()> {
    let a = load("first", a)?;
    let b = load("second", b)?;
    emit(&serde_json::json!({ "collides": collides(&a, &b) }))
}

fn contain(inner: &[String], outer: &str) -> Result<()> {
    let outer = load("outer", outer)?;
    let interiors = inner
        .iter()
        .map(|text| load("inner", text))
        .collect::<Result<Vec<_>>>()?;
    let each: Vec<bool> = interiors
        .iter()
        .map(|p| check_inside_container(p, &outer))
        .collect();
    emit(&serde_json::json!({
        "all_inside": check_multiple_in_bound(&interiors, &outer),
        "inside": each,
    }))
}

fn fit(
    inner: &str,
    outer: &str,
    mode: Mode,
    cfg: &SearchCfg,
    iterations: usize,
    seed: Option<u64>,
    at: Option<&str>,
) -> Result<()> {
    let inner = load("inner", inner)?;
    let outer = load("outer", outer)?;
    tracing::info!(
        precision = cfg.precision_digits,
        inner_vertices = inner.len(),
        outer_vertices = outer.len(),
        "fit"
    );
    let report = match mode {
        Mode::Scale => FitReport {
            mode: "scale",
            scale: find_min_scale(&inner, &outer, cfg)?,
            rotation_z: None,
            centre: None,
        },
        Mode::Rotation => {
            let centre = match at {
                Some(text) => {
                    let pts = parse_points(text)?;
                    ensure!(pts.len() == 1, "--at takes exactly one point, got {}", pts.len());
                    vector![pts[0].0, pts[0].1, 0.0]
                }
                None => outer.centre(),
            };
            let r = find_min_scale_with_rotation(&inner, &outer, centre, cfg)?;
            FitReport {
                mode: "rotation",
                scale: r.scale,
                rotation_z: Some(r.rotation_z),
                centre: Some([centre.x, centre.y]),
            }
        }
        Mode::Translation => {
            let f = match seed {
                Some(seed) => fit_seeded(&inner, &outer, iterations, seed, cfg)?,
                None => {
                    let mut rng = rand::thread_rng();
                    find_min_scale_with_translation(&inner, &outer, iterations, &mut rng, cfg)?
                }
            };
            FitReport {
                mode: "translation",
                scale: f.scale,
                rotation_z: Some(f.rotation_z),
                centre: Some([f.centre.x, f.centre.y]),
            }
        }
    };
    emit(&report)
}
