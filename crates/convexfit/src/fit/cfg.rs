//! Search configuration.

use crate::error::FitError;

/// Largest accepted `precision_digits`.
pub const MAX_PRECISION_DIGITS: u32 = 8;

/// Most angles a single rotation sweep pass may visit.
pub const MAX_SWEEP_ANGLES: f64 = 100_000.0;

/// Tunables for the three fitting searches.
///
/// Angles are in degrees, lengths in vertex-coordinate units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchCfg {
    /// Decimal digits refined after the growth loop (1..=8).
    pub precision_digits: u32,
    /// Absolute scale added per growth step while establishing containment.
    pub growth_step: f64,
    /// Growth steps allowed before reporting `NoContainment`.
    pub max_growth_steps: usize,
    /// Coarse, medium and fine angular resolutions. Pass 1 covers [0, 360];
    /// pass 2 covers ±coarse around the best angle, pass 3 ±medium.
    pub sweep_steps: [f64; 3],
    /// Initial distance of a translation probe from the container centroid.
    pub probe_radius: f64,
    /// Probe radius below which bisection gives up and uses the centroid.
    pub bisection_floor: f64,
    /// Reject inputs failing `Polygon::is_convex` instead of searching anyway.
    pub require_convex: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            precision_digits: 4,
            growth_step: 1.0,
            max_growth_steps: 10_000,
            sweep_steps: [10.0, 1.0, 0.1],
            probe_radius: 1600.0,
            bisection_floor: 0.001,
            require_convex: true,
        }
    }
}

impl SearchCfg {
    /// Default configuration at the given precision.
    pub fn with_precision(precision_digits: u32) -> Self {
        Self {
            precision_digits,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FitError> {
        if !(1..=MAX_PRECISION_DIGITS).contains(&self.precision_digits) {
            return Err(FitError::invalid(format!(
                "precision_digits must be in 1..={MAX_PRECISION_DIGITS}, got {}",
                self.precision_digits
            )));
        }
        if !(self.growth_step.is_finite() && self.growth_step > 0.0) {
            return Err(FitError::invalid("growth_step must be finite and > 0"));
        }
        if self.max_growth_steps == 0 {
            return Err(FitError::invalid("max_growth_steps must be > 0"));
        }
        if self
            .sweep_steps
            .iter()
            .any(|s| !(s.is_finite() && *s > 0.0))
        {
            return Err(FitError::invalid("sweep_steps must be finite and > 0"));
        }
        let [coarse, medium, fine] = self.sweep_steps;
        for (pass, span, step) in [
            (1, 360.0, coarse),
            (2, 2.0 * coarse, medium),
            (3, 2.0 * medium, fine),
        ] {
            if span / step > MAX_SWEEP_ANGLES {
                return Err(FitError::invalid(format!(
                    "sweep pass {pass} would visit more than {MAX_SWEEP_ANGLES} angles"
                )));
            }
        }
        if !(self.probe_radius.is_finite() && self.probe_radius > 0.0) {
            return Err(FitError::invalid("probe_radius must be finite and > 0"));
        }
        if !(self.bisection_floor.is_finite() && self.bisection_floor > 0.0) {
            return Err(FitError::invalid("bisection_floor must be finite and > 0"));
        }
        if self.bisection_floor >= self.probe_radius {
            return Err(FitError::invalid("bisection_floor < probe_radius required"));
        }
        Ok(())
    }
}
