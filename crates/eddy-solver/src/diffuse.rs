//! Implicit diffusion via the linear relaxation solver.

use crate::linsolve;
use eddy_core::{FieldKind, MS_PER_SECOND};
use eddy_grid::GridDims;

/// Diffuse `x0` into `x` at the given rate.
///
/// Assembles the implicit stencil `a = dt_s · rate · width · height`,
/// coefficients `(a, 1 + 4a)`, seeds `x` with `x0` as the initial guess,
/// and relaxes. The implicit form is unconditionally stable: any
/// non-negative rate and any `dt` relax toward a bounded solution instead
/// of blowing up like a forward-Euler stencil would.
///
/// A rate of `0` degenerates to an identity copy of `x0` into `x`
/// (with boundary enforcement); callers wanting inert fields rely on
/// this.
///
/// Seeding the destination with the source makes the result a pure
/// function of the inputs; whatever the destination held before does not
/// leak into the relaxation.
///
/// # Panics
///
/// Panics if any slice is shorter than `dims.padded_len()`.
pub fn diffuse(
    dims: GridDims,
    kind: FieldKind,
    x: &mut [f32],
    x0: &[f32],
    rate: f64,
    dt_ms: f64,
    iterations: u32,
    obstacles: &[bool],
) {
    let dt_s = dt_ms / MS_PER_SECOND;
    let a = dt_s * rate * f64::from(dims.width()) * f64::from(dims.height());

    x.copy_from_slice(x0);
    linsolve::lin_solve(
        dims,
        kind,
        x,
        x0,
        a as f32,
        (1.0 + 4.0 * a) as f32,
        iterations,
        obstacles,
    );
}
