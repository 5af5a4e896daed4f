//! Grid geometry: dimensions, bordered indexing, and resolution scaling.

use eddy_core::{ConfigError, MAX_AXIS};

/// Copyable geometry of a bordered rectangular grid.
///
/// The interior spans `width × height` logical cells; every buffer carries
/// an extra one-cell border ring on each side, so flat storage has
/// `(width + 2) · (height + 2)` entries. Logical cell `(x, y)` lives at
/// flat offset `(x + 1) + (width + 2) · (y + 1)`.
///
/// Stage functions receive `GridDims` by value and index buffers through
/// it, keeping the arithmetic in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Create a geometry description, validating both axes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] / [`ConfigError::InvalidHeight`]
    /// when an axis is zero or exceeds [`MAX_AXIS`].
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_AXIS {
            return Err(ConfigError::InvalidWidth { value: width });
        }
        if height == 0 || height > MAX_AXIS {
            return Err(ConfigError::InvalidHeight { value: height });
        }
        Ok(Self { width, height })
    }

    /// Interior width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Interior height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interior cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Flat length of every buffer, border ring included.
    pub fn padded_len(&self) -> usize {
        (self.width as usize + 2) * (self.height as usize + 2)
    }

    /// Row stride of the flat layout (`width + 2`).
    pub fn stride(&self) -> usize {
        self.width as usize + 2
    }

    /// Flat offset of bordered coordinates `(i, j)`.
    ///
    /// `i` runs over `0..width + 2` and `j` over `0..height + 2`; the
    /// interior occupies `1..=width` and `1..=height`.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i + self.stride() * j
    }

    /// Flat offset of the logical cell `(x, y)`, or `None` outside
    /// `[0, width) × [0, height)`.
    #[inline]
    pub fn checked(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.idx(x as usize + 1, y as usize + 1))
    }

    /// Resolution scaling factor `sqrt(width · height)`.
    ///
    /// Couples advection step size and divergence measurements to grid
    /// resolution so velocity units stay resolution-independent.
    pub fn scale(&self) -> f64 {
        (self.width as f64 * self.height as f64).sqrt()
    }
}
