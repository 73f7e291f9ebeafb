//! Convex polygon collision, containment and minimal enclosing scale search.
//!
//! Layout
//! - `geom`: vector primitives (dot, edge normal, random search direction).
//! - `polygon`: `Polygon` with cached centroid and accumulated `Transform`.
//! - `sat`: separating-axis collision and containment tests.
//! - `fit`: scale, scale+rotation and scale+rotation+translation searches.
//!
//! Conventions
//! - Points are `Vector3<f64>`; all algorithms work in the XY plane and carry
//!   `z` along untouched.
//! - Vertices are wound clockwise in a y-up frame, so edge left-normals point
//!   outward. `Polygon::is_convex` rejects counter-clockwise input.
//! - Containment is strict: touching the container boundary counts as overlap.

pub mod error;
pub mod fit;
pub mod geom;
pub mod polygon;
pub mod sat;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{FitError, GeomError};
pub use geom::Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{FitError, GeomError};
    pub use crate::fit::{
        find_min_scale, find_min_scale_with_rotation, find_min_scale_with_translation,
        fit_seeded, fit_with_defaults, Fit, RotationFit, SearchCfg,
    };
    pub use crate::geom::{dot, edge_normal, random_direction, Vec3};
    pub use crate::polygon::{Polygon, Transform};
    pub use crate::sat::{
        check_collision_on_axis, check_collisions, check_inside_container,
        check_multiple_in_bound, collides, project_on_axis, AxisOrder, Projection,
    };
}
