//! The mutable fluid state: bordered field buffers plus the obstacle mask.

use crate::dims::GridDims;
use eddy_core::{ConfigError, GridError};

/// Owned per-cell state of one fluid area.
///
/// Seven equal-length buffers over a bordered `(width + 2) × (height + 2)`
/// lattice: the three live fields (`density`, `velocity_x`, `velocity_y`),
/// their source accumulators, and the obstacle mask. The border ring holds
/// derived boundary values only and is never addressed by logical
/// coordinates.
///
/// # Access policy
///
/// Reads at coordinates outside `[0, width) × [0, height)` return
/// [`GridError::CoordOutOfBounds`]. Writes at such coordinates are silent
/// no-ops: input-injection callers sweep pointer paths that legitimately
/// leave the domain mid-gesture, and dropping those samples is the intended
/// behavior. Every mutator documents this.
///
/// # Sources
///
/// The `*_source` buffers accumulate external injection between ticks. The
/// engine reads them during a step but never clears them; call
/// [`reset_sources`](Self::reset_sources) once the tick has consumed them.
#[derive(Clone, Debug)]
pub struct FluidGrid {
    dims: GridDims,
    density: Vec<f32>,
    velocity_x: Vec<f32>,
    velocity_y: Vec<f32>,
    density_source: Vec<f32>,
    velocity_x_source: Vec<f32>,
    velocity_y_source: Vec<f32>,
    obstacles: Vec<bool>,
}

/// Split-borrow view over a grid's buffers.
///
/// Produced by [`FluidGrid::parts_mut`] so the engine can hand disjoint
/// field slices to the stage functions within one tick.
pub struct GridParts<'a> {
    /// Live density field.
    pub density: &'a mut [f32],
    /// Live x-velocity field.
    pub velocity_x: &'a mut [f32],
    /// Live y-velocity field.
    pub velocity_y: &'a mut [f32],
    /// Density injection accumulated since the last reset.
    pub density_source: &'a [f32],
    /// X-velocity injection accumulated since the last reset.
    pub velocity_x_source: &'a [f32],
    /// Y-velocity injection accumulated since the last reset.
    pub velocity_y_source: &'a [f32],
    /// Per-cell solid mask.
    pub obstacles: &'a [bool],
}

impl FluidGrid {
    /// Create a zeroed grid with the given interior dimensions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either axis is zero or exceeds the
    /// maximum axis length.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let dims = GridDims::new(width, height)?;
        let len = dims.padded_len();
        Ok(Self {
            dims,
            density: vec![0.0; len],
            velocity_x: vec![0.0; len],
            velocity_y: vec![0.0; len],
            density_source: vec![0.0; len],
            velocity_x_source: vec![0.0; len],
            velocity_y_source: vec![0.0; len],
            obstacles: vec![false; len],
        })
    }

    /// Grid geometry.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Interior width in cells.
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Interior height in cells.
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    fn read(&self, buf: &[f32], x: i32, y: i32) -> Result<f32, GridError> {
        match self.dims.checked(x, y) {
            Some(i) => Ok(buf[i]),
            None => Err(self.oob(x, y)),
        }
    }

    fn oob(&self, x: i32, y: i32) -> GridError {
        GridError::CoordOutOfBounds {
            x,
            y,
            width: self.dims.width(),
            height: self.dims.height(),
        }
    }

    // ── Live fields ────────────────────────────────────────────────

    /// Density at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn density(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.read(&self.density, x, y)
    }

    /// X-velocity at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn velocity_x(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.read(&self.velocity_x, x, y)
    }

    /// Y-velocity at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn velocity_y(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.read(&self.velocity_y, x, y)
    }

    /// Set the density at `(x, y)`. Out-of-range coordinates are a no-op.
    pub fn set_density(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.density[i] = value;
        }
    }

    /// Set the x-velocity at `(x, y)`. Out-of-range coordinates are a no-op.
    pub fn set_velocity_x(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.velocity_x[i] = value;
        }
    }

    /// Set the y-velocity at `(x, y)`. Out-of-range coordinates are a no-op.
    pub fn set_velocity_y(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.velocity_y[i] = value;
        }
    }

    // ── Sources ────────────────────────────────────────────────────

    /// Pending density injection at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn density_source(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.read(&self.density_source, x, y)
    }

    /// Pending x-velocity injection at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn velocity_x_source(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.read(&self.velocity_x_source, x, y)
    }

    /// Pending y-velocity injection at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn velocity_y_source(&self, x: i32, y: i32) -> Result<f32, GridError> {
        self.read(&self.velocity_y_source, x, y)
    }

    /// Overwrite the pending density injection at `(x, y)`.
    /// Out-of-range coordinates are a no-op.
    pub fn set_density_source(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.density_source[i] = value;
        }
    }

    /// Overwrite the pending x-velocity injection at `(x, y)`.
    /// Out-of-range coordinates are a no-op.
    pub fn set_velocity_x_source(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.velocity_x_source[i] = value;
        }
    }

    /// Overwrite the pending y-velocity injection at `(x, y)`.
    /// Out-of-range coordinates are a no-op.
    pub fn set_velocity_y_source(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.velocity_y_source[i] = value;
        }
    }

    /// Accumulate density injection at `(x, y)`.
    ///
    /// Additive so several inputs can land on the same cell within one
    /// tick. Out-of-range coordinates are a no-op.
    pub fn add_density_source(&mut self, x: i32, y: i32, delta: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.density_source[i] += delta;
        }
    }

    /// Accumulate x-velocity injection at `(x, y)`.
    /// Out-of-range coordinates are a no-op.
    pub fn add_velocity_x_source(&mut self, x: i32, y: i32, delta: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.velocity_x_source[i] += delta;
        }
    }

    /// Accumulate y-velocity injection at `(x, y)`.
    /// Out-of-range coordinates are a no-op.
    pub fn add_velocity_y_source(&mut self, x: i32, y: i32, delta: f32) {
        if let Some(i) = self.dims.checked(x, y) {
            self.velocity_y_source[i] += delta;
        }
    }

    /// Zero all three source buffers.
    ///
    /// Callers invoke this after each tick once the pending injection has
    /// been consumed; skipping it lets sources accumulate across ticks.
    pub fn reset_sources(&mut self) {
        self.density_source.fill(0.0);
        self.velocity_x_source.fill(0.0);
        self.velocity_y_source.fill(0.0);
    }

    // ── Obstacles ──────────────────────────────────────────────────

    /// Whether the cell at `(x, y)` is solid.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordOutOfBounds`] outside the logical domain.
    pub fn obstacle(&self, x: i32, y: i32) -> Result<bool, GridError> {
        match self.dims.checked(x, y) {
            Some(i) => Ok(self.obstacles[i]),
            None => Err(self.oob(x, y)),
        }
    }

    /// Mark the cell at `(x, y)` as solid or free.
    ///
    /// Must only be called between ticks; the solver reads the mask but
    /// never writes it. Out-of-range coordinates are a no-op.
    pub fn set_obstacle(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(i) = self.dims.checked(x, y) {
            self.obstacles[i] = solid;
        }
    }

    /// Clear the whole obstacle mask.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.fill(false);
    }

    // ── Statistics ─────────────────────────────────────────────────

    /// Sum of interior density values.
    pub fn total_density(&self) -> f64 {
        let mut total = 0.0f64;
        for y in 1..=self.dims.height() as usize {
            for x in 1..=self.dims.width() as usize {
                total += f64::from(self.density[self.dims.idx(x, y)]);
            }
        }
        total
    }

    /// Largest interior density value, or `0.0` on an empty field.
    pub fn max_density(&self) -> f32 {
        let mut max = f32::MIN;
        for y in 1..=self.dims.height() as usize {
            for x in 1..=self.dims.width() as usize {
                max = max.max(self.density[self.dims.idx(x, y)]);
            }
        }
        max
    }

    // ── Raw views ──────────────────────────────────────────────────

    /// Split-borrow view over all buffers for the stage functions.
    pub fn parts_mut(&mut self) -> GridParts<'_> {
        GridParts {
            density: &mut self.density,
            velocity_x: &mut self.velocity_x,
            velocity_y: &mut self.velocity_y,
            density_source: &self.density_source,
            velocity_x_source: &self.velocity_x_source,
            velocity_y_source: &self.velocity_y_source,
            obstacles: &self.obstacles,
        }
    }

    /// The obstacle mask as a flat bordered slice.
    pub fn obstacles_raw(&self) -> &[bool] {
        &self.obstacles
    }
}
