//! Polygon & transform model.
//!
//! Purpose
//! - Own an ordered, clockwise vertex sequence with a cached centroid that is
//!   kept in lockstep with every mutation.
//! - Record the net effect of all mutators in an advisory `Transform`.
//!
//! Conventions
//! - Scale and rotation act about the centroid; translation moves it.
//! - Mutators are in-place with no undo. Callers that try a pose and discard
//!   it must restore explicitly, or work on a clone (`with_transform` returns
//!   a posed copy).
//! - Convexity is detectable (`is_convex`) but never corrected.

mod shape;
mod types;

pub use shape::Polygon;
pub use types::Transform;
