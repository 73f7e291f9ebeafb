//! Scale + rotation search: three coarse-to-fine angular sweeps.

use tracing::debug;

use crate::error::FitError;
use crate::geom::Vec3;
use crate::polygon::Polygon;

use super::{RotationFit, SearchCfg, Workbench};

/// Best absolute inner rotation (and its minimal outer scale) with the inner
/// centroid placed at `centre`.
///
/// Pass 1 sweeps [0°, 360°] in `sweep_steps[0]` increments, pass 2 sweeps
/// ±`sweep_steps[0]` around the best angle in `sweep_steps[1]` increments,
/// pass 3 ±`sweep_steps[1]` in `sweep_steps[2]` increments. Ties keep the
/// earlier angle.
pub fn find_min_scale_with_rotation(
    inner: &Polygon,
    outer: &Polygon,
    centre: Vec3,
    cfg: &SearchCfg,
) -> Result<RotationFit, FitError> {
    Workbench::new(inner, outer, cfg)?.min_scale_with_rotation(centre)
}

impl Workbench<'_> {
    /// Sweep on the working copies; inner rotation and position are restored.
    pub(super) fn min_scale_with_rotation(
        &mut self,
        centre: Vec3,
    ) -> Result<RotationFit, FitError> {
        let start_centre = self.inner.centre();
        let start_rotation = self.inner.transform().rotation_z;
        self.inner.translate_to(centre);
        let result = self.sweep_passes();
        self.inner.rotate_to(start_rotation);
        self.inner.translate_to(start_centre);
        result
    }

    fn sweep_passes(&mut self) -> Result<RotationFit, FitError> {
        let [coarse, medium, fine] = self.cfg.sweep_steps;
        let mut best = RotationFit {
            scale: f64::INFINITY,
            rotation_z: 0.0,
        };
        self.sweep(0.0, 360.0, coarse, &mut best)?;
        let around = best.rotation_z;
        self.sweep(around - coarse, around + coarse, medium, &mut best)?;
        let around = best.rotation_z;
        self.sweep(around - medium, around + medium, fine, &mut best)?;
        Ok(best)
    }

    /// Score every angle `from + k * step <= to`.
    fn sweep(
        &mut self,
        from: f64,
        to: f64,
        step: f64,
        best: &mut RotationFit,
    ) -> Result<(), FitError> {
        // Slack so that e.g. 2.0 / 0.1 still yields the closing angle.
        let count = ((to - from) / step + 1e-9).floor() as usize;
        for k in 0..=count {
            let angle = from + k as f64 * step;
            self.inner.rotate_to(angle);
            let scale = self.min_scale()?;
            if scale < best.scale {
                *best = RotationFit {
                    scale,
                    rotation_z: angle,
                };
            }
        }
        debug!(
            from,
            to,
            step,
            best_angle = best.rotation_z,
            best_scale = best.scale,
            "rotation sweep pass"
        );
        Ok(())
    }
}
