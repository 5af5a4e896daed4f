//! Unit constants and configuration defaults.

/// Milliseconds per second.
///
/// Step durations are supplied in milliseconds (the natural unit of an
/// animation-frame caller); stage math runs on seconds. Dividing `dt` by
/// this constant is the only unit conversion in the engine, so callers
/// calibrating against a different time base change one place.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Default relaxation sweep count.
///
/// Ten sweeps is enough for interactive use; raise it to trade CPU time
/// for a tighter linear solve.
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Default step duration in milliseconds.
pub const DEFAULT_STEP_DURATION_MS: f64 = 100.0;

/// Maximum length of a grid axis.
///
/// Interior coordinates plus the border ring must stay addressable with
/// `i32` arithmetic during backtracing.
pub const MAX_AXIS: u32 = i32::MAX as u32 - 2;
