use super::*;
use crate::sat::check_inside_container;
use nalgebra::vector;
use rand::{rngs::StdRng, SeedableRng};

fn square(half: f64) -> Polygon {
    Polygon::from_xy(&[(-half, half), (half, half), (half, -half), (-half, -half)]).unwrap()
}

/// Clockwise near-equilateral triangle centred on the origin.
fn triangle() -> Polygon {
    Polygon::from_xy(&[(0.0, 1.0), (0.87, -0.5), (-0.87, -0.5)]).unwrap()
}

/// Triangle scaled by 3 and turned 40°, rebuilt so its transform is identity.
fn big_turned_triangle() -> Polygon {
    let mut t = triangle();
    t.scale_by(3.0);
    t.rotate_by(40.0);
    Polygon::new(t.vertices().to_vec()).unwrap()
}

fn cfg(precision_digits: u32) -> SearchCfg {
    SearchCfg::with_precision(precision_digits)
}

#[test]
fn unit_square_in_double_square_is_half() {
    let s = find_min_scale(&square(0.5), &square(1.0), &cfg(4)).unwrap();
    assert!(s >= 0.5 - 1e-9, "scale {s}");
    assert!(s - 0.5 <= 1e-4 + 1e-9, "scale {s}");
}

#[test]
fn min_scale_is_feasible_and_one_step_tighter_is_not() {
    // Threshold 0.4537 sits between grid points, so the answer has real slack.
    let inner = square(0.4537);
    let outer = square(1.0);
    let s = find_min_scale(&inner, &outer, &cfg(3)).unwrap();
    assert!((s - 0.454).abs() < 1e-9, "scale {s}");
    let mut at = outer.clone();
    at.scale_to(s).unwrap();
    assert!(check_inside_container(&inner, &at));
    at.scale_to(s - 1e-3).unwrap();
    assert!(!check_inside_container(&inner, &at));
}

#[test]
fn min_scale_grows_from_infeasible_start() {
    // Inner twice as large as the outer: growth must run first.
    let s = find_min_scale(&square(2.0), &square(1.0), &cfg(3)).unwrap();
    assert!(s > 2.0 && s <= 2.0 + 1e-2 + 1e-9, "scale {s}");
}

#[test]
fn searches_leave_caller_polygons_untouched() {
    let inner = triangle();
    let outer = big_turned_triangle();
    let (inner0, outer0) = (inner.clone(), outer.clone());
    find_min_scale(&inner, &outer, &cfg(2)).unwrap();
    find_min_scale_with_rotation(&inner, &outer, vector![0.1, 0.0, 0.0], &cfg(2)).unwrap();
    fit_seeded(&inner, &outer, 2, 3, &cfg(2)).unwrap();
    assert_eq!(inner, inner0);
    assert_eq!(outer, outer0);
}

#[test]
fn triangle_aligned_min_scale_is_one_third() {
    let mut inner = triangle();
    inner.rotate_by(40.0);
    let s = find_min_scale(&inner, &big_turned_triangle(), &cfg(3)).unwrap();
    assert!(s > 1.0 / 3.0, "scale {s}");
    assert!((s - 1.0 / 3.0).abs() < 1e-3, "scale {s}");
}

#[test]
fn triangle_rotation_sweep_recovers_relative_angle() {
    let inner = triangle();
    let outer = big_turned_triangle();
    let fit = find_min_scale_with_rotation(&inner, &outer, Vec3::zeros(), &cfg(3)).unwrap();
    let turn = fit.rotation_z.rem_euclid(120.0);
    assert!((turn - 40.0).abs() < 0.5, "angle {}", fit.rotation_z);
    assert!((fit.scale - 1.0 / 3.0).abs() < 1e-3, "scale {}", fit.scale);
}

#[test]
fn rotation_never_worse_than_initial_orientation() {
    let inner = Polygon::from_xy(&[(-1.0, 0.3), (1.0, 0.3), (1.0, -0.3), (-1.0, -0.3)]).unwrap();
    let outer = triangle();
    let centre = outer.centre();
    let fixed = find_min_scale(&inner, &outer, &cfg(3)).unwrap();
    let swept = find_min_scale_with_rotation(&inner, &outer, centre, &cfg(3)).unwrap();
    assert!(swept.scale <= fixed, "{} > {fixed}", swept.scale);
}

#[test]
fn translation_never_worse_than_centred_baseline() {
    let inner = Polygon::from_xy(&[(-0.2, 0.2), (0.6, 0.2), (0.6, -0.2), (-0.2, -0.2)]).unwrap();
    let outer = triangle();
    let c = cfg(3);
    let baseline = find_min_scale_with_rotation(&inner, &outer, outer.centre(), &c).unwrap();
    let fit = fit_seeded(&inner, &outer, 4, 11, &c).unwrap();
    assert!(fit.scale <= baseline.scale);
}

#[test]
fn translation_is_reproducible_for_a_seed() {
    let inner = square(0.3);
    let outer = triangle();
    let c = cfg(2);
    let a = fit_seeded(&inner, &outer, 3, 99, &c).unwrap();
    let b = fit_seeded(&inner, &outer, 3, 99, &c).unwrap();
    assert_eq!(a, b);
    let mut rng = StdRng::seed_from_u64(99);
    let d = find_min_scale_with_translation(&inner, &outer, 3, &mut rng, &c).unwrap();
    assert_eq!(a, d);
}

#[test]
fn committed_fit_encloses_inner() {
    let inner = square(0.3);
    let outer = triangle();
    let fit = fit_seeded(&inner, &outer, 3, 5, &cfg(3)).unwrap();
    let (posed_inner, mut posed_outer) = fit.posed(&inner, &outer).unwrap();
    assert!((posed_inner.centre() - fit.centre).norm() < 1e-9);
    assert!((posed_inner.transform().rotation_z - fit.rotation_z).abs() < 1e-12);
    assert!((posed_outer.transform().scale - fit.scale).abs() < 1e-12);
    posed_outer.scale_to(fit.scale * (1.0 + 1e-6)).unwrap();
    assert!(check_inside_container(&posed_inner, &posed_outer));

    // `apply` on live polygons matches `posed`.
    let (mut live_inner, mut live_outer) = (inner.clone(), outer.clone());
    fit.apply(&mut live_inner, &mut live_outer).unwrap();
    assert_eq!((live_inner, live_outer), fit.posed(&inner, &outer).unwrap());

    let t = fit.to_transform();
    assert_eq!((t.scale, t.rotation_z, t.translation), (fit.scale, fit.rotation_z, fit.centre));
}

#[test]
fn invalid_params_are_rejected() {
    let (inner, outer) = (square(0.5), square(1.0));
    for digits in [0, MAX_PRECISION_DIGITS + 1] {
        let err = find_min_scale(&inner, &outer, &cfg(digits)).unwrap_err();
        assert!(matches!(err, FitError::InvalidParams { .. }), "{err}");
    }
    let bad = SearchCfg {
        bisection_floor: 2000.0,
        ..SearchCfg::default()
    };
    assert!(matches!(bad.validate(), Err(FitError::InvalidParams { .. })));
    let bad = SearchCfg {
        sweep_steps: [10.0, 0.0, 0.1],
        ..SearchCfg::default()
    };
    assert!(bad.validate().is_err());
    let mut rng = StdRng::seed_from_u64(0);
    let err = find_min_scale_with_translation(&inner, &outer, 0, &mut rng, &cfg(2)).unwrap_err();
    assert!(matches!(err, FitError::InvalidParams { .. }));
}

#[test]
fn convexity_gate_rejects_then_allows_when_disabled() {
    // Counter-clockwise inner square.
    let ccw = Polygon::from_xy(&[(-0.5, 0.5), (-0.5, -0.5), (0.5, -0.5), (0.5, 0.5)]).unwrap();
    let outer = square(1.0);
    assert_eq!(
        find_min_scale(&ccw, &outer, &cfg(4)),
        Err(FitError::NotConvex { role: "inner" })
    );
    assert_eq!(
        find_min_scale(&outer, &ccw, &cfg(4)),
        Err(FitError::NotConvex { role: "outer" })
    );
    // Containment only uses the outer's normals, so the inner's winding is irrelevant.
    let lax = SearchCfg {
        require_convex: false,
        ..cfg(4)
    };
    let s = find_min_scale(&ccw, &outer, &lax).unwrap();
    assert!((s - 0.5).abs() <= 1e-4 + 1e-9);
}

#[test]
fn growth_cap_reports_no_containment() {
    // Zero-area outer can never contain anything.
    let sliver = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
    let lax = SearchCfg {
        require_convex: false,
        max_growth_steps: 5,
        ..cfg(2)
    };
    let err = find_min_scale(&square(0.1), &sliver, &lax).unwrap_err();
    assert!(matches!(err, FitError::NoContainment { steps: 5, .. }), "{err}");
}

#[test]
fn far_inner_is_reached_by_growth() {
    let mut inner = square(0.5);
    inner.translate_to(vector![20.0, 0.0, 0.0]);
    let s = find_min_scale(&inner, &square(1.0), &cfg(2)).unwrap();
    // Needs half-width > 20.5.
    assert!(s > 20.5 && s < 20.5 * 1.02, "scale {s}");
}

/// Exactly equilateral, clockwise, centred on the origin.
fn equilateral() -> Polygon {
    let h = 3f64.sqrt() / 2.0;
    Polygon::from_xy(&[(0.0, 1.0), (h, -0.5), (-h, -0.5)]).unwrap()
}

#[test]
fn rotation_sweep_refines_off_grid_angle() {
    // 37.3° is off the coarse and medium grids, so only the fine pass reaches it.
    let mut outer = equilateral();
    outer.scale_by(3.0);
    outer.rotate_by(37.3);
    let outer = Polygon::new(outer.vertices().to_vec()).unwrap();
    let c = cfg(5);
    let fit = find_min_scale_with_rotation(&equilateral(), &outer, Vec3::zeros(), &c).unwrap();
    let turn = fit.rotation_z.rem_euclid(120.0);
    assert!((turn - 37.3).abs() < 0.1 + 1e-9, "angle {}", fit.rotation_z);

    let mut aligned = equilateral();
    aligned.rotate_by(37.3);
    let exact = find_min_scale(&aligned, &outer, &c).unwrap();
    assert!((fit.scale - exact).abs() < 1e-3, "{} vs {exact}", fit.scale);
}

#[test]
fn translation_moves_off_centroid_and_beats_baseline() {
    // Tall triangle: the square has more room near the base than at the centroid.
    let outer = Polygon::from_xy(&[(0.0, 3.0), (1.0, 0.0), (-1.0, 0.0)]).unwrap();
    let inner = square(0.2);
    let c = cfg(3);
    let baseline = find_min_scale_with_rotation(&inner, &outer, outer.centre(), &c).unwrap();
    assert!((baseline.scale - 0.4).abs() < 2e-3, "baseline {}", baseline.scale);
    // Only rays within ~18° of straight down reach the improving region.
    let fit = fit_seeded(&inner, &outer, 100, 17, &c).unwrap();
    assert!(fit.scale < baseline.scale - 1e-3, "{} vs {}", fit.scale, baseline.scale);
    assert!((fit.centre - outer.centre()).norm() > 1e-3, "centre {:?}", fit.centre);
    // Lower bound: the square sitting on the base needs scale 1/3.
    assert!(fit.scale > 1.0 / 3.0);
}

#[test]
fn probe_centre_bisects_toward_container() {
    let c = SearchCfg::default();
    let mut bench = Workbench::new(&square(0.2), &square(1.0), &c).unwrap();
    let home = bench.outer.centre();
    // 1600 / 2^11 = 0.78125 is the first radius with |x| + 0.2 < 1.
    let got = bench.probe_centre(home, vector![1.0, 0.0, 0.0]);
    assert_eq!(got, vector![0.78125, 0.0, 0.0]);
    assert!(bench.fits());
    assert_eq!(bench.inner.centre(), got);
}

#[test]
fn probe_centre_falls_back_to_home_at_floor() {
    // Inner larger than the outer: no radius on the ray fits.
    let c = SearchCfg::default();
    let mut bench = Workbench::new(&square(2.0), &square(1.0), &c).unwrap();
    let home = bench.outer.centre();
    let got = bench.probe_centre(home, vector![0.6, -0.3, 0.0]);
    assert_eq!(got, home);
    assert!((bench.inner.centre() - home).norm() < 1e-12);
    assert!(!bench.fits());
}

#[test]
fn sweep_step_ratios_are_bounded() {
    for steps in [[1e-300, 1.0, 0.1], [10.0, 1e-300, 0.1], [10.0, 1.0, 1e-300]] {
        let bad = SearchCfg {
            sweep_steps: steps,
            ..SearchCfg::default()
        };
        let err = find_min_scale(&square(0.5), &square(1.0), &bad).unwrap_err();
        assert!(matches!(err, FitError::InvalidParams { .. }), "{err}");
    }
    // Fine but bounded passes are accepted.
    let fine = SearchCfg {
        sweep_steps: [0.01, 1e-3, 1e-5],
        ..SearchCfg::default()
    };
    assert!(fine.validate().is_ok());
    assert!(360.0 / fine.sweep_steps[0] < MAX_SWEEP_ANGLES);
}

#[test]
fn result_translation_is_absolute_centre_not_delta() {
    // Inner built away from the origin, so its accumulated translation starts at zero.
    let inner = Polygon::from_xy(&[(4.7, -3.7), (5.3, -3.7), (5.3, -4.3), (4.7, -4.3)]).unwrap();
    let outer = triangle();
    let fit = fit_seeded(&inner, &outer, 2, 5, &cfg(2)).unwrap();
    let t = fit.to_transform();
    let (posed, _) = fit.posed(&inner, &outer).unwrap();
    assert!((posed.centre() - t.translation).norm() < 1e-9);
    let delta = t.translation - inner.centre();
    assert!((posed.transform().translation - delta).norm() < 1e-9);
    assert!((posed.transform().translation - t.translation).norm() > 1.0);
}
