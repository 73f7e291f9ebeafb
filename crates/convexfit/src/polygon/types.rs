//! Accumulated transform bookkeeping.

use crate::geom::Vec3;

/// Net transform applied to a polygon since construction.
///
/// Invariants:
/// - `scale` is the product of every `scale_by` factor.
/// - `rotation_z` is the sum of every `rotate_by` angle, in degrees.
/// - `translation` is the sum of every `translate_by` delta.
///
/// Advisory only: vertex positions are the source of truth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub rotation_z: f64,
    pub translation: Vec3,
}

impl Transform {
    #[inline]
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            rotation_z: 0.0,
            translation: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn new(scale: f64, rotation_z: f64, translation: Vec3) -> Self {
        Self {
            scale,
            rotation_z,
            translation,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
