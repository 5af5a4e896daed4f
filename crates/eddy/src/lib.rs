//! eddy: stable 2D incompressible fluid simulation on a rectangular grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the eddy sub-crates. For most users, adding `eddy` as a single
//! dependency is sufficient.
//!
//! The solver advances a density field and a velocity field per tick with
//! a semi-implicit scheme: sourced quantities diffuse implicitly, advect
//! semi-Lagrangian along the velocity field, and the velocity field is
//! projected back toward divergence-free. Every stage is unconditionally
//! stable; the caller picks the tick cadence.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! // A 32x24 area with a solid pillar in the flow.
//! let mut cfg = SolverConfig::new(32, 24);
//! cfg.viscosity = 0.0001;
//! let mut field = FluidField::new(cfg).unwrap();
//! field.rasterize_obstacle(&ObstacleShape::Disk { cx: 16, cy: 12, radius: 3 });
//!
//! // Inject smoke and a rightward gust, then run a few 16 ms frames.
//! for _ in 0..10 {
//!     field.add_density_source(4, 12, 120.0);
//!     field.add_velocity_x_source(4, 12, 40.0);
//!     field.update_with(16.0);
//!     field.reset_sources();
//! }
//!
//! assert!(field.density(5, 12).unwrap() >= 0.0);
//! assert_eq!(field.tick(), TickId(10));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | Field kinds, tick ids, errors, unit constants |
//! | [`grid`] | `eddy-grid` | Grid storage, geometry, obstacle shapes |
//! | [`solver`] | `eddy-solver` | The individual solver stages |
//! | [`engine`] | `eddy-engine` | Configuration and the step orchestrator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and unit constants (`eddy-core`).
pub use eddy_core as types;

/// Grid storage, geometry, and obstacle rasterization (`eddy-grid`).
pub use eddy_grid as grid;

/// Solver stages: boundary, relaxation, diffusion, advection, projection
/// (`eddy-solver`).
///
/// Only needed when driving stages individually; the engine sequences
/// them for you.
pub use eddy_solver as solver;

/// Configuration, step orchestration, and metrics (`eddy-engine`).
pub use eddy_engine as engine;

/// Common imports for typical eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    pub use eddy_core::{ConfigError, FieldKind, GridError, TickId};
    pub use eddy_engine::{FluidField, SolverConfig, StepMetrics};
    pub use eddy_grid::{FluidGrid, GridDims, ObstacleShape};
}
