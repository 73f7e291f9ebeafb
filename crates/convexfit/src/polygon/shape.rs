use crate::error::GeomError;
use crate::geom::{dot, edge_normal, Vec3};

use super::types::Transform;

/// Convex polygon in the XY plane with cached centroid and accumulated transform.
///
/// Invariants:
/// - At construction: at least 3 finite vertices, no zero-length edge
///   (closing edge included). Mutators do not re-check this; `scale_by(0.0)`
///   collapses every vertex onto the centroid and non-finite arguments
///   propagate into the coordinates.
/// - `centre` is the coordinate-wise mean of `vertices` after every mutator.
/// - Expected (not enforced) convex and clockwise; see `is_convex`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec3>,
    centre: Vec3,
    transform: Transform,
}

impl Polygon {
    /// Build from an ordered vertex list; the transform starts at identity.
    pub fn new(vertices: Vec<Vec3>) -> Result<Self, GeomError> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeomError::TooFewVertices { got: n });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()))
        {
            return Err(GeomError::NonFiniteVertex { index });
        }
        for k in 0..n {
            if vertices[k] == vertices[(k + 1) % n] {
                return Err(GeomError::DegenerateEdge { index: k });
            }
        }
        let centre = vertices.iter().fold(Vec3::zeros(), |acc, v| acc + v) / n as f64;
        Ok(Self {
            vertices,
            centre,
            transform: Transform::identity(),
        })
    }

    /// Planar convenience constructor (`z = 0`).
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self, GeomError> {
        Self::new(points.iter().map(|&(x, y)| Vec3::new(x, y, 0.0)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn centre(&self) -> Vec3 {
        self.centre
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Directed edges `(v[k], v[k+1])`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Convexity (and clockwise winding) check over every cyclic triple.
    ///
    /// For each `(a, b, c)`, `b - a` must project strictly positive onto the
    /// left normal of `a → c`. Collinear triples fail. Counter-clockwise
    /// input fails too, since its middle vertices fall on the other side.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        (0..n).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % n];
            let c = self.vertices[(k + 2) % n];
            dot(&(b - a), &edge_normal(&a, &c)) > 0.0
        })
    }

    /// Scale every vertex about the centroid; `transform.scale *= factor`.
    pub fn scale_by(&mut self, factor: f64) {
        let c = self.centre;
        for v in &mut self.vertices {
            *v = c + (*v - c) * factor;
        }
        self.transform.scale *= factor;
    }

    /// Rescale to an absolute accumulated scale.
    ///
    /// Fails with `ZeroScale` if the current scale is zero (no ratio exists).
    pub fn scale_to(&mut self, scale: f64) -> Result<(), GeomError> {
        if self.transform.scale == 0.0 {
            return Err(GeomError::ZeroScale);
        }
        self.scale_by(scale / self.transform.scale);
        Ok(())
    }

    /// Rotate about the centroid by `degrees` around Z.
    ///
    /// Applies the standard 2D rotation matrix to X/Y (clockwise on a y-down
    /// screen); `z` is untouched. `transform.rotation_z += degrees`.
    pub fn rotate_by(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let c = self.centre;
        for v in &mut self.vertices {
            let x = v.x - c.x;
            let y = v.y - c.y;
            v.x = c.x + x * cos - y * sin;
            v.y = c.y + x * sin + y * cos;
        }
        self.transform.rotation_z += degrees;
    }

    /// Rotate to an absolute accumulated angle (degrees).
    pub fn rotate_to(&mut self, degrees: f64) {
        self.rotate_by(degrees - self.transform.rotation_z);
    }

    /// Move every vertex and the centroid by `delta`.
    pub fn translate_by(&mut self, delta: Vec3) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.centre += delta;
        self.transform.translation += delta;
    }

    /// Move so that the centroid lands on `target`.
    pub fn translate_to(&mut self, target: Vec3) {
        self.translate_by(target - self.centre);
    }

    /// Posed copy at an absolute transform; `self` is left untouched.
    ///
    /// Scale and rotation are applied about the centroid first, then the
    /// copy is shifted so its accumulated translation equals `target.translation`.
    pub fn with_transform(&self, target: &Transform) -> Result<Polygon, GeomError> {
        let mut out = self.clone();
        out.scale_to(target.scale)?;
        out.rotate_to(target.rotation_z);
        out.translate_by(target.translation - out.transform.translation);
        Ok(out)
    }
}
