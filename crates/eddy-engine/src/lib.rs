//! Step orchestration for the eddy fluid engine.
//!
//! [`FluidField`] owns a [`FluidGrid`](eddy_grid::FluidGrid) plus the
//! scratch buffers one tick needs, and sequences the solver stages into
//! the fixed density and velocity pipelines. [`SolverConfig`] validates
//! the physical parameters up front; [`StepMetrics`] reports per-tick
//! timings.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod field;
mod metrics;

pub use config::SolverConfig;
pub use field::FluidField;
pub use metrics::StepMetrics;
