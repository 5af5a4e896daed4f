//! Per-tick timing metrics.

/// Timing data for the most recent tick.
///
/// All durations are in microseconds. The engine overwrites these fields
/// after every completed tick; read them between ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent in the density pipeline.
    pub density_step_us: u64,
    /// Time spent in the velocity pipeline.
    pub velocity_step_us: u64,
    /// Cumulative number of completed ticks.
    pub ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.density_step_us, 0);
        assert_eq!(m.velocity_step_us, 0);
        assert_eq!(m.ticks, 0);
    }
}
