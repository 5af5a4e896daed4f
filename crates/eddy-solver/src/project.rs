//! Helmholtz projection: make the velocity field approximately
//! divergence-free.

use crate::{boundary, linsolve};
use eddy_core::FieldKind;
use eddy_grid::GridDims;

/// Compute the discrete divergence of `(u, v)` into `out` over the
/// interior.
///
/// `out[i,j] = −0.5·((u[i+1,j]−u[i−1,j]) + (v[i,j+1]−v[i,j−1])) / s` with
/// `s = sqrt(width·height)`. Only interior cells are written; run the
/// boundary enforcer afterwards if the ring matters.
///
/// # Panics
///
/// Panics if any slice is shorter than `dims.padded_len()`.
pub fn divergence(dims: GridDims, u: &[f32], v: &[f32], out: &mut [f32]) {
    let w = dims.width() as usize;
    let h = dims.height() as usize;
    let s = dims.scale() as f32;

    for j in 1..=h {
        for i in 1..=w {
            let du = u[dims.idx(i + 1, j)] - u[dims.idx(i - 1, j)];
            let dv = v[dims.idx(i, j + 1)] - v[dims.idx(i, j - 1)];
            out[dims.idx(i, j)] = -0.5 * (du + dv) / s;
        }
    }
}

/// Project `(u, v)` onto its divergence-free part.
///
/// Computes the divergence into `div`, zeroes the pressure scratch,
/// solves the Poisson system `4p − Σ p_neighbours = div` with the fixed
/// relaxation count, then subtracts the discrete pressure gradient from
/// both components and re-enforces their boundaries. This discards the
/// irrotational part of the field (Helmholtz–Hodge decomposition),
/// leaving the divergence bounded by how far the relaxation converged,
/// not exactly zero.
///
/// `p` and `div` are caller-provided scratch; their previous contents are
/// ignored and overwritten.
///
/// # Panics
///
/// Panics if any slice is shorter than `dims.padded_len()`.
pub fn project(
    dims: GridDims,
    u: &mut [f32],
    v: &mut [f32],
    p: &mut [f32],
    div: &mut [f32],
    iterations: u32,
    obstacles: &[bool],
) {
    let w = dims.width() as usize;
    let h = dims.height() as usize;
    let s = dims.scale() as f32;

    divergence(dims, u, v, div);
    for j in 1..=h {
        for i in 1..=w {
            p[dims.idx(i, j)] = 0.0;
        }
    }
    boundary::enforce(dims, FieldKind::Scalar, div, obstacles);
    boundary::enforce(dims, FieldKind::Scalar, p, obstacles);

    linsolve::lin_solve(dims, FieldKind::Scalar, p, div, 1.0, 4.0, iterations, obstacles);

    for j in 1..=h {
        for i in 1..=w {
            let gx = p[dims.idx(i + 1, j)] - p[dims.idx(i - 1, j)];
            let gy = p[dims.idx(i, j + 1)] - p[dims.idx(i, j - 1)];
            u[dims.idx(i, j)] -= 0.5 * s * gx;
            v[dims.idx(i, j)] -= 0.5 * s * gy;
        }
    }
    boundary::enforce(dims, FieldKind::VelocityX, u, obstacles);
    boundary::enforce(dims, FieldKind::VelocityY, v, obstacles);
}
