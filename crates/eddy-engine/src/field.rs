//! The fluid field: grid plus scratch plus the fixed stage pipelines.

use std::time::Instant;

use eddy_core::{ConfigError, FieldKind, GridError, TickId};
use eddy_grid::{FluidGrid, ObstacleShape};
use eddy_solver::{advect, diffuse, project, source};

use crate::config::SolverConfig;
use crate::metrics::StepMetrics;

/// Scratch buffers one tick needs, kept out of the grid so the seven
/// externally visible arrays keep their meaning across ticks.
#[derive(Clone, Debug)]
struct Scratch {
    density_prev: Vec<f32>,
    u_prev: Vec<f32>,
    v_prev: Vec<f32>,
    pressure: Vec<f32>,
    divergence: Vec<f32>,
}

impl Scratch {
    fn new(len: usize) -> Self {
        Self {
            density_prev: vec![0.0; len],
            u_prev: vec![0.0; len],
            v_prev: vec![0.0; len],
            pressure: vec![0.0; len],
            divergence: vec![0.0; len],
        }
    }
}

/// A simulated fluid area: owned state plus the step orchestrator.
///
/// Each call to [`update`](Self::update) (or
/// [`update_with`](Self::update_with)) advances the field by one tick:
///
/// - **density**: fold in the density source, diffuse at the configured
///   rate, advect along the velocity field;
/// - **velocity**: fold in both velocity sources, diffuse at the
///   viscosity, project out divergence, self-advect, project again.
///
/// Diffusion precedes the first projection because it introduces
/// divergence; advection sits between the projections so the field
/// carrying itself is already divergence-cleaned, and the divergence it
/// reintroduces is removed afterwards.
///
/// A tick runs synchronously to completion; the caller decides cadence
/// and must serialize `update` with any obstacle-mask edits and with
/// concurrent reads (mid-tick field values are non-physical). Sources
/// are read but never cleared: call
/// [`reset_sources`](Self::reset_sources) once a tick has consumed them,
/// or leave them to keep injecting the same amounts.
///
/// # Examples
///
/// ```
/// use eddy_engine::{FluidField, SolverConfig};
///
/// let mut field = FluidField::new(SolverConfig::new(5, 5)).unwrap();
/// field.add_density_source(2, 2, 100.0);
/// field.update_with(1.0);
/// field.reset_sources();
///
/// let injected = field.density(2, 2).unwrap();
/// assert!((injected - 0.1).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct FluidField {
    config: SolverConfig,
    grid: FluidGrid,
    scratch: Scratch,
    tick: TickId,
    metrics: StepMetrics,
}

impl FluidField {
    /// Build an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] the configuration violates.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = FluidGrid::new(config.width, config.height)?;
        let scratch = Scratch::new(grid.dims().padded_len());
        Ok(Self {
            config,
            grid,
            scratch,
            tick: TickId::default(),
            metrics: StepMetrics::default(),
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Read access to the underlying grid.
    pub fn grid(&self) -> &FluidGrid {
        &self.grid
    }

    /// Mutable access to the underlying grid, for callers that need more
    /// than the delegated surface. Only use between ticks.
    pub fn grid_mut(&mut self) -> &mut FluidGrid {
        &mut self.grid
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Timings of the most recent tick.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance one tick using the configured step duration.
    pub fn update(&mut self) {
        self.update_with(self.config.step_duration_ms);
    }

    /// Advance one tick with an explicit step duration in milliseconds.
    ///
    /// The duration is the caller's stability lever: this engine performs
    /// no adaptive stepping and no sanitization, so a non-finite or
    /// wildly large `dt_ms` poisons the fields rather than erroring.
    pub fn update_with(&mut self, dt_ms: f64) {
        let tick_start = Instant::now();

        let density_start = Instant::now();
        self.density_step(dt_ms);
        let density_step_us = density_start.elapsed().as_micros() as u64;

        let velocity_start = Instant::now();
        self.velocity_step(dt_ms);
        let velocity_step_us = velocity_start.elapsed().as_micros() as u64;

        self.tick = self.tick.next();
        self.metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            density_step_us,
            velocity_step_us,
            ticks: self.tick.0,
        };
    }

    fn density_step(&mut self, dt_ms: f64) {
        let dims = self.grid.dims();
        let iterations = self.config.iterations;
        let rate = self.config.diffusion_rate;
        let parts = self.grid.parts_mut();
        let scratch = &mut self.scratch;

        source::add_scaled(dims, parts.density, parts.density_source, dt_ms);
        diffuse::diffuse(
            dims,
            FieldKind::Scalar,
            &mut scratch.density_prev,
            parts.density,
            rate,
            dt_ms,
            iterations,
            parts.obstacles,
        );
        advect::advect(
            dims,
            FieldKind::Scalar,
            parts.density,
            &scratch.density_prev,
            parts.velocity_x,
            parts.velocity_y,
            dt_ms,
            parts.obstacles,
        );
    }

    fn velocity_step(&mut self, dt_ms: f64) {
        let dims = self.grid.dims();
        let iterations = self.config.iterations;
        let viscosity = self.config.viscosity;
        let parts = self.grid.parts_mut();
        let scratch = &mut self.scratch;

        source::add_scaled(dims, parts.velocity_x, parts.velocity_x_source, dt_ms);
        source::add_scaled(dims, parts.velocity_y, parts.velocity_y_source, dt_ms);

        diffuse::diffuse(
            dims,
            FieldKind::VelocityX,
            &mut scratch.u_prev,
            parts.velocity_x,
            viscosity,
            dt_ms,
            iterations,
            parts.obstacles,
        );
        diffuse::diffuse(
            dims,
            FieldKind::VelocityY,
            &mut scratch.v_prev,
            parts.velocity_y,
            viscosity,
            dt_ms,
            iterations,
            parts.obstacles,
        );

        project::project(
            dims,
            &mut scratch.u_prev,
            &mut scratch.v_prev,
            &mut scratch.pressure,
            &mut scratch.divergence,
            iterations,
            parts.obstacles,
        );

        advect::advect(
            dims,
            FieldKind::VelocityX,
            parts.velocity_x,
            &scratch.u_prev,
            &scratch.u_prev,
            &scratch.v_prev,
            dt_ms,
            parts.obstacles,
        );
        advect::advect(
            dims,
            FieldKind::VelocityY,
            parts.velocity_y,
            &scratch.v_prev,
            &scratch.u_prev,
            &scratch.v_prev,
            dt_ms,
            parts.obstacles,
        );

        project::project(
            dims,
            parts.velocity_x,
            parts.velocity_y,
            &mut scratch.pressure,
            &mut scratch.divergence,
            iterations,
            parts.obstacles,
        );
    }

    // ── Delegated cell access ──────────────────────────────────────

    /// Density at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn density(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.grid.density(x, y)
    }

    /// X-velocity at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn velocity_x(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.grid.velocity_x(x, y)
    }

    /// Y-velocity at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn velocity_y(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.grid.velocity_y(x, y)
    }

    /// Set the density at `(x, y)`. Out-of-range coordinates are a no-op.
    pub fn set_density(&mut self, x: i32, y: i32, value: f32) {
        self.grid.set_density(x, y, value);
    }

    /// Set the x-velocity at `(x, y)`. Out-of-range coordinates are a no-op.
    pub fn set_velocity_x(&mut self, x: i32, y: i32, value: f32) {
        self.grid.set_velocity_x(x, y, value);
    }

    /// Set the y-velocity at `(x, y)`. Out-of-range coordinates are a no-op.
    pub fn set_velocity_y(&mut self, x: i32, y: i32, value: f32) {
        self.grid.set_velocity_y(x, y, value);
    }

    /// Accumulate density injection for the next tick.
    /// Out-of-range coordinates are a no-op.
    pub fn add_density_source(&mut self, x: i32, y: i32, delta: f32) {
        self.grid.add_density_source(x, y, delta);
    }

    /// Accumulate x-velocity injection for the next tick.
    /// Out-of-range coordinates are a no-op.
    pub fn add_velocity_x_source(&mut self, x: i32, y: i32, delta: f32) {
        self.grid.add_velocity_x_source(x, y, delta);
    }

    /// Accumulate y-velocity injection for the next tick.
    /// Out-of-range coordinates are a no-op.
    pub fn add_velocity_y_source(&mut self, x: i32, y: i32, delta: f32) {
        self.grid.add_velocity_y_source(x, y, delta);
    }

    /// Zero all three source buffers.
    pub fn reset_sources(&mut self) {
        self.grid.reset_sources();
    }

    /// Whether the cell at `(x, y)` is solid.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn obstacle(&self, x: i32, y: i32) -> Result<bool, GridError> {
        self.grid.obstacle(x, y)
    }

    /// Mark the cell at `(x, y)` as solid or free. Only between ticks.
    /// Out-of-range coordinates are a no-op.
    pub fn set_obstacle(&mut self, x: i32, y: i32, solid: bool) {
        self.grid.set_obstacle(x, y, solid);
    }

    /// Rasterize a solid shape into the obstacle mask. Only between ticks.
    pub fn rasterize_obstacle(&mut self, shape: &ObstacleShape) {
        self.grid.rasterize_obstacle(shape);
    }

    /// Clear the whole obstacle mask.
    pub fn clear_obstacles(&mut self) {
        self.grid.clear_obstacles();
    }
}
