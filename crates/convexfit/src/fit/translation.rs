//! Scale + rotation + translation search with random restarts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::FitError;
use crate::geom::{random_direction, Vec3};
use crate::polygon::Polygon;

use super::{Fit, SearchCfg, Workbench};

/// Randomized local search over inner centre, inner rotation and outer scale.
///
/// 1. Baseline: rotation sweep with the inner centred on the outer centroid.
/// 2. The baseline pose is committed to the working copies.
/// 3. `iterations` times: draw a direction `d`, place the inner at
///    `home + d * r` with `r = probe_radius`, halve `r` until the inner fits
///    (or `r <= bisection_floor`, then use `home`), and run the rotation sweep
///    there. Strict improvements replace the incumbent.
///
/// Not guaranteed to find the global optimum; never worse than the baseline.
/// Reproducible for a given `rng` state.
pub fn find_min_scale_with_translation<R: Rng + ?Sized>(
    inner: &Polygon,
    outer: &Polygon,
    iterations: usize,
    rng: &mut R,
    cfg: &SearchCfg,
) -> Result<Fit, FitError> {
    if iterations == 0 {
        return Err(FitError::invalid("iterations must be > 0"));
    }
    Workbench::new(inner, outer, cfg)?.min_scale_with_translation(iterations, rng)
}

/// Deterministic variant seeded through `StdRng::seed_from_u64`.
pub fn fit_seeded(
    inner: &Polygon,
    outer: &Polygon,
    iterations: usize,
    seed: u64,
    cfg: &SearchCfg,
) -> Result<Fit, FitError> {
    let mut rng = StdRng::seed_from_u64(seed);
    find_min_scale_with_translation(inner, outer, iterations, &mut rng, cfg)
}

/// Unseeded run with the default configuration (differs run to run).
pub fn fit_with_defaults(
    inner: &Polygon,
    outer: &Polygon,
    iterations: usize,
) -> Result<Fit, FitError> {
    let mut rng = rand::thread_rng();
    find_min_scale_with_translation(inner, outer, iterations, &mut rng, &SearchCfg::default())
}

impl Workbench<'_> {
    fn min_scale_with_translation<R: Rng + ?Sized>(
        &mut self,
        iterations: usize,
        rng: &mut R,
    ) -> Result<Fit, FitError> {
        let home = self.outer.centre();
        let baseline = self.min_scale_with_rotation(home)?;
        let mut best = Fit {
            scale: baseline.scale,
            rotation_z: baseline.rotation_z,
            centre: home,
        };
        self.outer.scale_to(baseline.scale)?;
        self.inner.rotate_to(baseline.rotation_z);

        for iteration in 0..iterations {
            let direction = random_direction(rng);
            let centre = self.probe_centre(home, direction);
            let candidate = self.min_scale_with_rotation(centre)?;
            debug!(
                iteration,
                x = centre.x,
                y = centre.y,
                scale = candidate.scale,
                angle = candidate.rotation_z,
                "translation probe"
            );
            if candidate.scale < best.scale {
                best = Fit {
                    scale: candidate.scale,
                    rotation_z: candidate.rotation_z,
                    centre,
                };
            }
        }
        Ok(best)
    }

    /// Halve the probe distance along `direction` until the inner fits.
    ///
    /// Leaves the inner at the returned centre.
    pub(super) fn probe_centre(&mut self, home: Vec3, direction: Vec3) -> Vec3 {
        let mut radius = self.cfg.probe_radius;
        let mut centre = home + direction * radius;
        self.inner.translate_to(centre);
        while !self.fits() {
            radius /= 2.0;
            if radius <= self.cfg.bisection_floor {
                debug!(radius, "probe bisection hit floor; using container centroid");
                centre = home;
                self.inner.translate_to(centre);
                break;
            }
            centre = home + direction * radius;
            self.inner.translate_to(centre);
        }
        centre
    }
}
