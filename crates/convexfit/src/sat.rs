//! Separating-axis collision and containment tests.
//!
//! Candidate axes are the (unnormalized) edge left-normals of the polygons.
//! All verdicts assume convex, clockwise input; a concave polygon can yield a
//! wrong collision or containment answer without any error being raised.
//! Use `Polygon::is_convex` to detect that case up front.

use crate::geom::{dot, edge_normal, Vec3};
use crate::polygon::Polygon;

/// Extent of a point set projected onto an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
    pub min_index: usize,
    pub max_index: usize,
}

/// Outcome of comparing two projections on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrder {
    /// `a.max < b.min`: separated, `a` lower.
    ABelow,
    /// `b.max < a.min`: separated, `b` lower.
    BBelow,
    /// Intervals overlap or touch.
    Overlap,
}

impl AxisOrder {
    #[inline]
    pub fn is_separated(self) -> bool {
        !matches!(self, AxisOrder::Overlap)
    }

    fn of(a: &Projection, b: &Projection) -> Self {
        if b.max < a.min {
            AxisOrder::BBelow
        } else if a.max < b.min {
            AxisOrder::ABelow
        } else {
            AxisOrder::Overlap
        }
    }
}

/// Project a non-empty point slice; ties keep the earliest index.
fn project_points(points: &[Vec3], axis: &Vec3) -> Projection {
    let first = dot(&points[0], axis);
    let mut out = Projection {
        min: first,
        max: first,
        min_index: 0,
        max_index: 0,
    };
    for (k, p) in points.iter().enumerate().skip(1) {
        let d = dot(p, axis);
        if d < out.min {
            out.min = d;
            out.min_index = k;
        }
        if d > out.max {
            out.max = d;
            out.max_index = k;
        }
    }
    out
}

/// Min/max projection of the polygon's vertices onto `axis`, with the indices
/// of the vertices attaining them.
pub fn project_on_axis(poly: &Polygon, axis: &Vec3) -> Projection {
    project_points(poly.vertices(), axis)
}

/// Compare the projections of `a` and `b` on a single axis.
pub fn check_collision_on_axis(a: &Polygon, b: &Polygon, axis: &Vec3) -> AxisOrder {
    AxisOrder::of(&project_on_axis(a, axis), &project_on_axis(b, axis))
}

/// SAT over every edge normal of `a` then of `b`.
///
/// Returns `true` when some axis separates the polygons (no collision) and
/// `false` when every axis overlaps (collision). Touching counts as collision.
pub fn check_collisions(a: &Polygon, b: &Polygon) -> bool {
    a.edges()
        .chain(b.edges())
        .any(|(p, q)| check_collision_on_axis(a, b, &edge_normal(&p, &q)).is_separated())
}

/// Negation of `check_collisions`: `true` when the polygons overlap.
#[inline]
pub fn collides(a: &Polygon, b: &Polygon) -> bool {
    !check_collisions(a, b)
}

/// Strict containment of `inner` in `outer`.
///
/// Each outer edge is treated as a 2-vertex polygon and compared with `inner`
/// on that edge's outward normal. Only `ABelow` (inner entirely on the
/// interior side) keeps going; overlap or `BBelow` fails immediately.
pub fn check_inside_container(inner: &Polygon, outer: &Polygon) -> bool {
    outer.edges().all(|(p, q)| {
        let axis = edge_normal(&p, &q);
        let edge = project_points(&[p, q], &axis);
        AxisOrder::of(&project_on_axis(inner, &axis), &edge) == AxisOrder::ABelow
    })
}

/// `check_inside_container` for every interior; stops at the first failure.
pub fn check_multiple_in_bound<'a, I>(interiors: I, outer: &Polygon) -> bool
where
    I: IntoIterator<Item = &'a Polygon>,
{
    interiors
        .into_iter()
        .all(|inner| check_inside_container(inner, outer))
}
