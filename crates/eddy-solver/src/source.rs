//! Source injection: fold accumulated external input into a field.

use eddy_core::MS_PER_SECOND;
use eddy_grid::GridDims;

/// Add `dt · source` into `field` over every interior cell.
///
/// `dt_ms` is converted to seconds once; the per-cell update is
/// `field[i] += dt_s · source[i]`, computed in `f64` and narrowed on
/// store. Pure per-cell operation with no cross-cell coupling; the border
/// ring is left alone (it holds derived values only).
///
/// # Panics
///
/// Panics if either slice is shorter than `dims.padded_len()`.
pub fn add_scaled(dims: GridDims, field: &mut [f32], source: &[f32], dt_ms: f64) {
    let dt_s = dt_ms / MS_PER_SECOND;
    for j in 1..=dims.height() as usize {
        for i in 1..=dims.width() as usize {
            let idx = dims.idx(i, j);
            field[idx] = (f64::from(field[idx]) + dt_s * f64::from(source[idx])) as f32;
        }
    }
}
