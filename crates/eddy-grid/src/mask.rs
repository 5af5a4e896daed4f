//! Obstacle shape rasterization.
//!
//! External owners author solid regions as rectangles and disks; the
//! solver itself only ever consumes the per-cell mask. Rasterize shapes
//! between ticks, never during one.

use crate::grid::FluidGrid;

/// A solid region to rasterize into the obstacle mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObstacleShape {
    /// Axis-aligned rectangle. `x`/`y` is the top-left cell.
    Rect {
        /// Left column (inclusive).
        x: i32,
        /// Top row (inclusive).
        y: i32,
        /// Width in cells.
        width: u32,
        /// Height in cells.
        height: u32,
    },
    /// Euclidean disk of the given radius around a center cell.
    Disk {
        /// Center column.
        cx: i32,
        /// Center row.
        cy: i32,
        /// Radius in cells (inclusive).
        radius: u32,
    },
}

impl FluidGrid {
    /// Mark every cell covered by `shape` as solid.
    ///
    /// Cells falling outside the domain are skipped (the write no-op
    /// policy), so shapes may straddle the grid edge.
    pub fn rasterize_obstacle(&mut self, shape: &ObstacleShape) {
        match *shape {
            ObstacleShape::Rect {
                x,
                y,
                width,
                height,
            } => {
                for cy in y..y.saturating_add(height.min(i32::MAX as u32) as i32) {
                    for cx in x..x.saturating_add(width.min(i32::MAX as u32) as i32) {
                        self.set_obstacle(cx, cy, true);
                    }
                }
            }
            ObstacleShape::Disk { cx, cy, radius } => {
                let r = radius.min(i32::MAX as u32) as i32;
                let r2 = i64::from(r) * i64::from(r);
                for dy in -r..=r {
                    for dx in -r..=r {
                        let d2 = i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy);
                        if d2 <= r2 {
                            self.set_obstacle(cx + dx, cy + dy, true);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_count(g: &FluidGrid) -> usize {
        let mut n = 0;
        for y in 0..g.height() as i32 {
            for x in 0..g.width() as i32 {
                if g.obstacle(x, y).unwrap() {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn rect_covers_exactly_its_cells() {
        let mut g = FluidGrid::new(10, 10).unwrap();
        g.rasterize_obstacle(&ObstacleShape::Rect {
            x: 2,
            y: 3,
            width: 4,
            height: 3,
        });
        assert_eq!(solid_count(&g), 12);
        assert!(g.obstacle(2, 3).unwrap());
        assert!(g.obstacle(5, 5).unwrap());
        assert!(!g.obstacle(6, 3).unwrap());
        assert!(!g.obstacle(2, 6).unwrap());
    }

    #[test]
    fn disk_radius_two_is_thirteen_cells() {
        let mut g = FluidGrid::new(10, 10).unwrap();
        g.rasterize_obstacle(&ObstacleShape::Disk {
            cx: 5,
            cy: 5,
            radius: 2,
        });
        // dx^2 + dy^2 <= 4: center, 4 at distance 1, 4 diagonals, 4 at
        // distance 2 along the axes.
        assert_eq!(solid_count(&g), 13);
        assert!(g.obstacle(5, 5).unwrap());
        assert!(g.obstacle(7, 5).unwrap());
        assert!(g.obstacle(6, 6).unwrap());
        assert!(!g.obstacle(7, 6).unwrap());
    }

    #[test]
    fn shapes_clip_at_the_domain_edge() {
        let mut g = FluidGrid::new(6, 6).unwrap();
        g.rasterize_obstacle(&ObstacleShape::Disk {
            cx: 0,
            cy: 0,
            radius: 2,
        });
        // Only the in-domain quadrant survives.
        assert!(g.obstacle(0, 0).unwrap());
        assert!(g.obstacle(2, 0).unwrap());
        assert!(g.obstacle(1, 1).unwrap());
        assert_eq!(solid_count(&g), 6);

        g.clear_obstacles();
        assert_eq!(solid_count(&g), 0);
    }

    #[test]
    fn zero_radius_disk_is_a_single_cell() {
        let mut g = FluidGrid::new(6, 6).unwrap();
        g.rasterize_obstacle(&ObstacleShape::Disk {
            cx: 3,
            cy: 3,
            radius: 0,
        });
        assert_eq!(solid_count(&g), 1);
    }

    #[test]
    fn empty_rect_marks_nothing() {
        let mut g = FluidGrid::new(6, 6).unwrap();
        g.rasterize_obstacle(&ObstacleShape::Rect {
            x: 2,
            y: 2,
            width: 0,
            height: 3,
        });
        assert_eq!(solid_count(&g), 0);
    }
}
