//! Vector primitives shared by the polygon model, the SAT engine and the search.

use nalgebra::Vector3;
use rand::Rng;

/// Point or free direction in R³ (only X/Y take part in the 2D algorithms).
pub type Vec3 = Vector3<f64>;

/// Standard 3-component dot product.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Left-hand normal of the directed edge `a → b`, restricted to the XY plane.
///
/// Returns `(-(b.y - a.y), b.x - a.x, 0)`. Not normalized. For a clockwise
/// polygon this points outward.
#[inline]
pub fn edge_normal(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(-(b.y - a.y), b.x - a.x, 0.0)
}

/// Search perturbation direction: `x`, `y` uniform in [-1, 1], `z = 0`.
///
/// Not normalized; the magnitude is part of the sample.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0), 0.0)
}
