//! Fitting optimizer: smallest outer scale that still encloses the inner polygon.
//!
//! Purpose
//! - `find_min_scale`: poses held fixed; grow the outer until it contains the
//!   inner, then refine the scale downward one decimal digit at a time.
//! - `find_min_scale_with_rotation`: inner centred on a candidate point, three
//!   coarse-to-fine angular sweeps, each angle scored by `find_min_scale`.
//! - `find_min_scale_with_translation`: baseline at the outer centroid, then
//!   random rays bisected toward the container to pick further centres.
//!
//! Mutation discipline
//! - Entry points take `&Polygon` and never touch caller state. All trial
//!   poses are applied to private working copies (`Workbench`), and every
//!   nested search restores the copies to their pose at its own entry.
//! - Errors drop the working copies; there is nothing to roll back.
//!
//! Code cross-refs: `sat::check_inside_container`, `polygon::Polygon`.

mod cfg;
mod rotation;
mod scale;
mod translation;

pub use cfg::{SearchCfg, MAX_PRECISION_DIGITS, MAX_SWEEP_ANGLES};
pub use rotation::find_min_scale_with_rotation;
pub use scale::find_min_scale;
pub use translation::{find_min_scale_with_translation, fit_seeded, fit_with_defaults};

use crate::error::{FitError, GeomError};
use crate::geom::Vec3;
use crate::polygon::{Polygon, Transform};
use crate::sat::check_inside_container;

/// Best (scale, angle) pair from the rotation sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationFit {
    /// Absolute outer scale.
    pub scale: f64,
    /// Absolute inner rotation, degrees.
    pub rotation_z: f64,
}

/// Minimal enclosing configuration.
///
/// `scale` belongs to the outer polygon; `rotation_z` and `centre` to the inner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub rotation_z: f64,
    pub centre: Vec3,
}

impl Fit {
    /// Result record `{scale, rotation_z, translation}`.
    ///
    /// Unlike `Polygon::transform`, `translation` here is the absolute target
    /// of the inner centroid, not an accumulated delta, and `scale` belongs to
    /// the outer polygon. Feeding it to `Polygon::with_transform` therefore
    /// does not pose either polygon; use `apply` or `posed` for that.
    pub fn to_transform(&self) -> Transform {
        Transform::new(self.scale, self.rotation_z, self.centre)
    }

    /// Commit: scale the outer, rotate and move the inner.
    pub fn apply(&self, inner: &mut Polygon, outer: &mut Polygon) -> Result<(), GeomError> {
        outer.scale_to(self.scale)?;
        inner.rotate_to(self.rotation_z);
        inner.translate_to(self.centre);
        Ok(())
    }

    /// Posed copies `(inner, outer)`; the arguments are left untouched.
    pub fn posed(&self, inner: &Polygon, outer: &Polygon) -> Result<(Polygon, Polygon), GeomError> {
        let mut inner = inner.clone();
        let mut outer = outer.clone();
        self.apply(&mut inner, &mut outer)?;
        Ok((inner, outer))
    }
}

/// Working copies and configuration shared by the nested searches.
struct Workbench<'c> {
    inner: Polygon,
    outer: Polygon,
    cfg: &'c SearchCfg,
}

impl<'c> Workbench<'c> {
    fn new(inner: &Polygon, outer: &Polygon, cfg: &'c SearchCfg) -> Result<Self, FitError> {
        cfg.validate()?;
        if cfg.require_convex {
            if !inner.is_convex() {
                return Err(FitError::NotConvex { role: "inner" });
            }
            if !outer.is_convex() {
                return Err(FitError::NotConvex { role: "outer" });
            }
        }
        Ok(Self {
            inner: inner.clone(),
            outer: outer.clone(),
            cfg,
        })
    }

    #[inline]
    fn fits(&self) -> bool {
        check_inside_container(&self.inner, &self.outer)
    }
}

#[cfg(test)]
mod tests;
