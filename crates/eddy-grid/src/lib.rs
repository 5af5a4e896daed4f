//! Bordered grid storage for the eddy fluid engine.
//!
//! [`FluidGrid`] owns the seven per-cell buffers the solver operates on
//! (density, both velocity components, their source accumulators, and the
//! obstacle mask), padded with a one-cell border ring on every side.
//! [`GridDims`] is the copyable geometry view shared with the stage
//! functions, and [`ObstacleShape`] rasterizes solid rectangles and disks
//! into the mask.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod dims;
mod grid;
mod mask;

pub use dims::GridDims;
pub use grid::{FluidGrid, GridParts};
pub use mask::ObstacleShape;
