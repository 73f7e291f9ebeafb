//! Timing probe: fit a thin bar inside a triangle with all three searches.
//!
//! Prints the scale found by each search and its wall time, so the cost of
//! adding rotation and translation to the search is visible at a glance.

use std::time::Instant;

use convexfit::prelude::*;

fn main() {
    let outer = Polygon::from_xy(&[(0.0, 1.0), (0.87, -0.5), (-0.87, -0.5)])
        .expect("valid triangle");
    let inner = Polygon::from_xy(&[(-0.4, 0.1), (0.4, 0.1), (0.4, -0.1), (-0.4, -0.1)])
        .expect("valid bar");
    let cfg = SearchCfg::with_precision(3);

    let start = Instant::now();
    let scale = find_min_scale(&inner, &outer, &cfg).expect("scale search");
    let scale_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let rot = find_min_scale_with_rotation(&inner, &outer, outer.centre(), &cfg)
        .expect("rotation search");
    let rot_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let fit = fit_seeded(&inner, &outer, 8, 2024, &cfg).expect("translation search");
    let fit_ms = start.elapsed().as_secs_f64() * 1e3;

    println!("scale_only={scale:.4} time_ms={scale_ms:.3}");
    println!(
        "with_rotation={:.4} angle={:.1} time_ms={rot_ms:.3}",
        rot.scale, rot.rotation_z
    );
    println!(
        "with_translation={:.4} angle={:.1} centre=({:.4}, {:.4}) time_ms={fit_ms:.3}",
        fit.scale, fit.rotation_z, fit.centre.x, fit.centre.y
    );
}
