//! Solver stages for the eddy fluid engine.
//!
//! Each stage is a free function over borrowed field slices plus the
//! [`GridDims`](eddy_grid::GridDims) geometry: there is no solver object
//! and no hidden state. The engine sequences the stages; each one leaves
//! its output boundary-consistent before returning.
//!
//! # Stage order (each tick)
//!
//! Density: [`source::add_scaled`] → [`diffuse::diffuse`] →
//! [`advect::advect`].
//!
//! Velocity: [`source::add_scaled`] ×2 → [`diffuse::diffuse`] ×2 →
//! [`project::project`] → [`advect::advect`] ×2 (self-advection) →
//! [`project::project`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advect;
pub mod boundary;
pub mod diffuse;
pub mod linsolve;
pub mod project;
pub mod source;

pub use advect::advect;
pub use boundary::enforce;
pub use diffuse::diffuse;
pub use linsolve::lin_solve;
pub use project::{divergence, project};
pub use source::add_scaled;
