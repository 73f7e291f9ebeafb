//! Scale-only search (poses fixed).

use crate::error::FitError;
use crate::polygon::Polygon;

use super::{SearchCfg, Workbench};

/// Smallest absolute outer scale at which `inner` is strictly contained.
///
/// Growth adds `cfg.growth_step` to the outer scale until containment holds
/// (capped at `cfg.max_growth_steps`, else `NoContainment`). With that feasible
/// upper bound `u`, digit `d` in `1..=precision_digits` steps the scale down by
/// `u / 10^d` while containment still holds and backs off one step on the
/// first failure. The result is therefore feasible and within `u / 10^digits`
/// of the true threshold.
pub fn find_min_scale(inner: &Polygon, outer: &Polygon, cfg: &SearchCfg) -> Result<f64, FitError> {
    Workbench::new(inner, outer, cfg)?.min_scale()
}

impl Workbench<'_> {
    /// Run the scale search on the working copies; the outer scale is restored.
    pub(super) fn min_scale(&mut self) -> Result<f64, FitError> {
        let start = self.outer.transform().scale;
        let result = self.descend();
        let restored = self.outer.scale_to(start);
        let best = result?;
        restored?;
        Ok(best)
    }

    fn descend(&mut self) -> Result<f64, FitError> {
        let upper = self.grow_until_inside()?;
        for digit in 1..=self.cfg.precision_digits {
            let step = upper / 10f64.powi(digit as i32);
            self.shrink_while_inside(step)?;
        }
        Ok(self.outer.transform().scale)
    }

    fn grow_until_inside(&mut self) -> Result<f64, FitError> {
        let mut steps = 0;
        while !self.fits() {
            if steps == self.cfg.max_growth_steps {
                return Err(FitError::NoContainment {
                    steps,
                    scale: self.outer.transform().scale,
                });
            }
            let next = self.outer.transform().scale + self.cfg.growth_step;
            self.outer.scale_to(next)?;
            steps += 1;
        }
        Ok(self.outer.transform().scale)
    }

    /// Step down by `step` until containment breaks, then back off once.
    fn shrink_while_inside(&mut self, step: f64) -> Result<(), FitError> {
        loop {
            let feasible = self.outer.transform().scale;
            let trial = feasible - step;
            if trial <= 0.0 {
                return Ok(());
            }
            self.outer.scale_to(trial)?;
            if !self.fits() {
                self.outer.scale_to(feasible)?;
                return Ok(());
            }
        }
    }
}
