//! Error types for the eddy fluid engine.
//!
//! Organized by failure domain: grid access ([`GridError`]) and
//! construction-time validation ([`ConfigError`]). Both fail fast and are
//! surfaced to the caller unchanged; nothing is retried internally.

use std::error::Error;
use std::fmt;

/// Errors from bounds-checked grid reads.
///
/// Reads at coordinates outside `[0, width) × [0, height)` are rejected.
/// Writes at such coordinates are deliberately silent no-ops instead;
/// see the mutator docs on `FluidGrid` for the rationale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A read addressed a cell outside the logical domain.
    CoordOutOfBounds {
        /// Requested x coordinate.
        x: i32,
        /// Requested y coordinate.
        y: i32,
        /// Grid width the read was checked against.
        width: u32,
        /// Grid height the read was checked against.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinates ({x}, {y}) outside the field: \
                     0..{width} x 0..{height}"
                )
            }
        }
    }
}

impl Error for GridError {}

/// Errors detected while validating a solver configuration.
///
/// Returned by `SolverConfig::validate()` and the engine constructor.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width is zero or exceeds the maximum axis length.
    InvalidWidth {
        /// The rejected value.
        value: u32,
    },
    /// Height is zero or exceeds the maximum axis length.
    InvalidHeight {
        /// The rejected value.
        value: u32,
    },
    /// Relaxation iteration count is zero.
    InvalidIterations {
        /// The rejected value.
        value: u32,
    },
    /// Diffusion rate is negative or not finite.
    InvalidDiffusionRate {
        /// The rejected value.
        value: f64,
    },
    /// Viscosity is negative or not finite.
    InvalidViscosity {
        /// The rejected value.
        value: f64,
    },
    /// Default step duration is zero, negative, or not finite.
    InvalidStepDuration {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { value } => {
                write!(f, "width must be in 1..={}, got {value}", crate::units::MAX_AXIS)
            }
            Self::InvalidHeight { value } => {
                write!(f, "height must be in 1..={}, got {value}", crate::units::MAX_AXIS)
            }
            Self::InvalidIterations { value } => {
                write!(f, "iterations must be positive, got {value}")
            }
            Self::InvalidDiffusionRate { value } => {
                write!(f, "diffusion rate must be finite and >= 0, got {value}")
            }
            Self::InvalidViscosity { value } => {
                write!(f, "viscosity must be finite and >= 0, got {value}")
            }
            Self::InvalidStepDuration { value } => {
                write!(f, "step duration must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
