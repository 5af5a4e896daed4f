//! Solver configuration and validation.

use eddy_core::{
    ConfigError, DEFAULT_ITERATIONS, DEFAULT_STEP_DURATION_MS,
};
use eddy_grid::GridDims;

/// Complete configuration for constructing a [`FluidField`](crate::FluidField).
///
/// Plain data; [`validate()`](Self::validate) checks every invariant and
/// the constructor calls it, so an engine only ever exists with a sane
/// configuration.
///
/// # Stability contract
///
/// A nonzero [`diffusion_rate`](Self::diffusion_rate) combined with the
/// density pipeline is empirically known to diverge for interactive
/// parameter ranges. The engine neither detects nor repairs this: keep
/// the rate at `0.0` unless you have validated stability for your grid
/// size and step duration. Viscosity does not share the problem.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Interior grid width in cells.
    pub width: u32,
    /// Interior grid height in cells.
    pub height: u32,
    /// Density diffusion rate, `>= 0`. See the stability contract above.
    pub diffusion_rate: f64,
    /// Velocity diffusion rate (viscosity), `>= 0`.
    pub viscosity: f64,
    /// Gauss–Seidel sweeps per linear solve, `> 0`. More sweeps trade CPU
    /// time for a tighter solve; 10–40 covers interactive use.
    pub iterations: u32,
    /// Step duration in milliseconds used by
    /// [`update()`](crate::FluidField::update).
    pub step_duration_ms: f64,
}

impl SolverConfig {
    /// Configuration with the given grid size and the standard defaults:
    /// inert density and velocity (both rates `0.0`), 10 sweeps, 100 ms
    /// steps.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            diffusion_rate: 0.0,
            viscosity: 0.0,
            iterations: DEFAULT_ITERATIONS,
            step_duration_ms: DEFAULT_STEP_DURATION_MS,
        }
    }

    /// Validate every structural invariant.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidWidth`] / [`ConfigError::InvalidHeight`]
    ///   for a zero or oversized axis.
    /// - [`ConfigError::InvalidIterations`] for a zero sweep count.
    /// - [`ConfigError::InvalidDiffusionRate`] /
    ///   [`ConfigError::InvalidViscosity`] for negative or non-finite
    ///   rates.
    /// - [`ConfigError::InvalidStepDuration`] for a non-finite or
    ///   non-positive default duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Axes must form a valid bordered grid.
        GridDims::new(self.width, self.height)?;
        // 2. At least one relaxation sweep.
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations {
                value: self.iterations,
            });
        }
        // 3. Rates must be finite and non-negative.
        if !self.diffusion_rate.is_finite() || self.diffusion_rate < 0.0 {
            return Err(ConfigError::InvalidDiffusionRate {
                value: self.diffusion_rate,
            });
        }
        if !self.viscosity.is_finite() || self.viscosity < 0.0 {
            return Err(ConfigError::InvalidViscosity {
                value: self.viscosity,
            });
        }
        // 4. Default step duration must be usable as-is.
        if !self.step_duration_ms.is_finite() || self.step_duration_ms <= 0.0 {
            return Err(ConfigError::InvalidStepDuration {
                value: self.step_duration_ms,
            });
        }
        Ok(())
    }
}
