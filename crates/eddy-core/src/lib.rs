//! Core types for the eddy fluid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the eddy workspace: field
//! kinds, the tick counter, error types, and unit constants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod kind;
mod units;

pub use error::{ConfigError, GridError};
pub use id::TickId;
pub use kind::FieldKind;
pub use units::{
    DEFAULT_ITERATIONS, DEFAULT_STEP_DURATION_MS, MAX_AXIS, MS_PER_SECOND,
};
