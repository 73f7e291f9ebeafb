//! Error types for polygon construction and the fitting search.

use std::fmt;

/// Malformed geometry detected at construction or on a mutator.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A polygon needs at least three vertices (an empty list included).
    TooFewVertices { got: usize },
    /// A vertex has a NaN or infinite coordinate.
    NonFiniteVertex { index: usize },
    /// Edge `index → index + 1` (wrapping) has zero length.
    DegenerateEdge { index: usize },
    /// `scale_to` on a polygon whose accumulated scale is zero.
    ZeroScale,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            GeomError::NonFiniteVertex { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            GeomError::DegenerateEdge { index } => {
                write!(f, "edge starting at vertex {index} has zero length")
            }
            GeomError::ZeroScale => write!(f, "cannot rescale by ratio from a zero scale"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Failures of the fitting search.
#[derive(Clone, Debug, PartialEq)]
pub enum FitError {
    /// Search parameters outside their accepted range.
    InvalidParams { reason: String },
    /// An input polygon fails `Polygon::is_convex` while the convexity gate is on.
    NotConvex { role: &'static str },
    /// The growth loop hit its cap before the inner polygon fit.
    NoContainment { steps: usize, scale: f64 },
    /// A polygon mutator failed mid-search.
    Geometry(GeomError),
}

impl FitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid search params: {reason}"),
            Self::NotConvex { role } => write!(f, "{role} polygon is not convex (or not clockwise)"),
            Self::NoContainment { steps, scale } => write!(
                f,
                "could not establish containment within bounds ({steps} growth steps, scale {scale})"
            ),
            Self::Geometry(e) => write!(f, "geometry error during search: {e}"),
        }
    }
}

impl std::error::Error for FitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeomError> for FitError {
    fn from(e: GeomError) -> Self {
        Self::Geometry(e)
    }
}
