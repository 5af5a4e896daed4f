//! Boundary enforcement: domain edges and obstacle faces.
//!
//! Rewrites the border ring and every obstacle cell of a field so the
//! discrete no-penetration / insulating conditions hold. Invoked after
//! every relaxation sweep and after advection.

use eddy_core::FieldKind;
use eddy_grid::GridDims;
use smallvec::SmallVec;

/// Enforce boundary conditions on `field` in place.
///
/// Two passes:
///
/// 1. **Domain edges** — each border-ring cell mirrors the adjacent
///    interior cell, negated when `kind` is the velocity component
///    perpendicular to that edge. The four ring corners take the mean of
///    their two edge-adjacent ring neighbours.
/// 2. **Obstacles** — each interior cell flagged solid takes the mean of
///    its non-obstacle 4-neighbours, negated for velocity kinds, or `0.0`
///    when it has none.
///
/// Border-ring cells are never flagged solid, so the passes touch
/// disjoint cells. Safe to re-run: away from solid cells the result is a
/// fixed point after one application.
///
/// # Panics
///
/// Panics if `field` or `obstacles` is shorter than `dims.padded_len()`.
pub fn enforce(dims: GridDims, kind: FieldKind, field: &mut [f32], obstacles: &[bool]) {
    let w = dims.width() as usize;
    let h = dims.height() as usize;

    let flip_x = kind.negates_at_vertical_edge();
    let flip_y = kind.negates_at_horizontal_edge();

    for j in 1..=h {
        let left = field[dims.idx(1, j)];
        let right = field[dims.idx(w, j)];
        field[dims.idx(0, j)] = if flip_x { -left } else { left };
        field[dims.idx(w + 1, j)] = if flip_x { -right } else { right };
    }
    for i in 1..=w {
        let top = field[dims.idx(i, 1)];
        let bottom = field[dims.idx(i, h)];
        field[dims.idx(i, 0)] = if flip_y { -top } else { top };
        field[dims.idx(i, h + 1)] = if flip_y { -bottom } else { bottom };
    }

    field[dims.idx(0, 0)] = 0.5 * (field[dims.idx(1, 0)] + field[dims.idx(0, 1)]);
    field[dims.idx(0, h + 1)] = 0.5 * (field[dims.idx(1, h + 1)] + field[dims.idx(0, h)]);
    field[dims.idx(w + 1, 0)] = 0.5 * (field[dims.idx(w, 0)] + field[dims.idx(w + 1, 1)]);
    field[dims.idx(w + 1, h + 1)] =
        0.5 * (field[dims.idx(w, h + 1)] + field[dims.idx(w + 1, h)]);

    for j in 1..=h {
        for i in 1..=w {
            let c = dims.idx(i, j);
            if !obstacles[c] {
                continue;
            }
            let mut free: SmallVec<[f32; 4]> = SmallVec::new();
            for n in [
                dims.idx(i - 1, j),
                dims.idx(i + 1, j),
                dims.idx(i, j - 1),
                dims.idx(i, j + 1),
            ] {
                if !obstacles[n] {
                    free.push(field[n]);
                }
            }
            field[c] = if free.is_empty() {
                0.0
            } else {
                let mean = free.iter().sum::<f32>() / free.len() as f32;
                if kind.is_velocity() {
                    -mean
                } else {
                    mean
                }
            };
        }
    }
}
