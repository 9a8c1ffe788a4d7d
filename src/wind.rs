/*
 * Wind Field Module
 *
 * This module holds the upsampled wind vector field the trajectory agents
 * are advected through. A coarse grid of magnitude/direction samples is
 * converted to (v, u) components and bilinearly upsampled in lattice-index
 * space; the fine grid is then addressed through world coordinates.
 */

use nannou::prelude::*;

/// Fallback velocity for queries below the grid whose column still falls
/// inside the grid width.
pub const BELOW_GRID_VELOCITY: (f32, f32) = (4.7, 1.7);

/// Fallback velocity for queries below the grid and past its right edge.
pub const BELOW_GRID_PAST_RIGHT_VELOCITY: (f32, f32) = (4.3, -2.5);

/// Outcome of a bounds-checked field lookup. The caller picks the fallback
/// policy for the out-of-range cases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldLookup {
    /// The query landed on the grid; `(v, u)` are the stored components.
    InRange { v: f32, u: f32 },
    /// The query's row is below the grid. `past_right` tells whether the
    /// column also fell beyond the grid width.
    BelowGrid { past_right: bool },
    /// Any other out-of-bounds index, negative columns included.
    OutOfRange,
}

/// A fine grid of wind velocity samples covering a world rectangle.
pub struct WindField {
    v: Vec<Vec<f32>>,
    u: Vec<Vec<f32>>,
    rows: usize,
    cols: usize,
    bounds: Rect,
}

impl WindField {
    /// Build a field from coarse magnitude/direction grids.
    ///
    /// Each coarse cell is converted to components `u = m * sin(d)`,
    /// `v = m * cos(d)`, then both component grids are independently
    /// upsampled to `rows x cols` with bilinear interpolation over the coarse
    /// index range. The fine grid is mapped 1:1 by index onto `bounds`.
    pub fn from_polar(
        magnitude: &[Vec<f32>],
        direction: &[Vec<f32>],
        rows: usize,
        cols: usize,
        bounds: Rect,
    ) -> Self {
        debug_assert_eq!(magnitude.len(), direction.len());

        let mut coarse_v = Vec::with_capacity(magnitude.len());
        let mut coarse_u = Vec::with_capacity(magnitude.len());
        for (mag_row, dir_row) in magnitude.iter().zip(direction) {
            debug_assert_eq!(mag_row.len(), dir_row.len());
            let mut v_row = Vec::with_capacity(mag_row.len());
            let mut u_row = Vec::with_capacity(mag_row.len());
            for (&m, &d) in mag_row.iter().zip(dir_row) {
                v_row.push(m * d.cos());
                u_row.push(m * d.sin());
            }
            coarse_v.push(v_row);
            coarse_u.push(u_row);
        }

        Self {
            v: upsample_bilinear(&coarse_v, rows, cols),
            u: upsample_bilinear(&coarse_u, rows, cols),
            rows,
            cols,
            bounds,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked lookup at a world coordinate.
    ///
    /// World coordinates map to grid indices through
    /// `row = floor(rows * (y - bottom) / height)` and likewise for columns.
    pub fn lookup(&self, world_y: f32, world_x: f32) -> FieldLookup {
        let row = (self.rows as f32 * (world_y - self.bounds.bottom()) / self.bounds.h()).floor();
        let col = (self.cols as f32 * (world_x - self.bounds.left()) / self.bounds.w()).floor();
        let (row, col) = (row as i64, col as i64);

        if row < 0 {
            return FieldLookup::BelowGrid {
                past_right: col >= self.cols as i64,
            };
        }
        if row >= self.rows as i64 || col < 0 || col >= self.cols as i64 {
            return FieldLookup::OutOfRange;
        }
        FieldLookup::InRange {
            v: self.v[row as usize][col as usize],
            u: self.u[row as usize][col as usize],
        }
    }

    /// Sample the field velocity `(v, u)` at a world coordinate, applying the
    /// documented fallback policy: fixed entry velocities below the grid,
    /// calm air everywhere else off the grid.
    pub fn sample(&self, world_y: f32, world_x: f32) -> (f32, f32) {
        match self.lookup(world_y, world_x) {
            FieldLookup::InRange { v, u } => (v, u),
            FieldLookup::BelowGrid { past_right: false } => BELOW_GRID_VELOCITY,
            FieldLookup::BelowGrid { past_right: true } => BELOW_GRID_PAST_RIGHT_VELOCITY,
            FieldLookup::OutOfRange => {
                log::debug!(
                    "wind lookup off-grid at ({}, {}); treating as calm",
                    world_y,
                    world_x
                );
                (0.0, 0.0)
            }
        }
    }
}

/// Bilinearly upsample `grid` to `rows x cols`. Sample positions are spread
/// uniformly over the source index range `[0, len - 1]`, endpoints inclusive.
fn upsample_bilinear(grid: &[Vec<f32>], rows: usize, cols: usize) -> Vec<Vec<f32>> {
    let src_rows = grid.len();
    let src_cols = grid.first().map_or(0, Vec::len);
    if src_rows == 0 || src_cols == 0 || rows == 0 || cols == 0 {
        return vec![Vec::new(); rows];
    }

    let src_pos = |i: usize, dst_len: usize, src_len: usize| -> f32 {
        if dst_len > 1 {
            i as f32 * (src_len - 1) as f32 / (dst_len - 1) as f32
        } else {
            0.0
        }
    };

    let mut out = Vec::with_capacity(rows);
    for i in 0..rows {
        let y = src_pos(i, rows, src_rows);
        let y0 = y.floor() as usize;
        let y1 = (y0 + 1).min(src_rows - 1);
        let ty = y - y0 as f32;

        let mut row = Vec::with_capacity(cols);
        for j in 0..cols {
            let x = src_pos(j, cols, src_cols);
            let x0 = x.floor() as usize;
            let x1 = (x0 + 1).min(src_cols - 1);
            let tx = x - x0 as f32;

            let top = lerp(grid[y0][x0], grid[y0][x1], tx);
            let bot = lerp(grid[y1][x0], grid[y1][x1], tx);
            row.push(lerp(top, bot, ty));
        }
        out.push(row);
    }
    out
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> Rect {
        Rect::from_corners(pt2(-1.0, -1.0), pt2(1.0, 1.0))
    }

    #[test]
    fn upsample_preserves_lattice_points_at_identity_size() {
        let grid = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let fine = upsample_bilinear(&grid, 2, 2);
        assert_eq!(fine, grid);
    }

    #[test]
    fn upsample_interpolates_midpoints() {
        let grid = vec![vec![0.0, 2.0], vec![4.0, 6.0]];
        let fine = upsample_bilinear(&grid, 3, 3);
        // Row and column midpoints average the neighboring coarse samples
        assert_eq!(fine[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(fine[1], vec![2.0, 3.0, 4.0]);
        assert_eq!(fine[2], vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn polar_conversion_splits_into_components() {
        let mag = vec![vec![2.0]];
        let dir = vec![vec![0.5]];
        let field = WindField::from_polar(&mag, &dir, 1, 1, unit_bounds());
        match field.lookup(0.0, 0.0) {
            FieldLookup::InRange { v, u } => {
                assert!((v - 2.0 * 0.5f32.cos()).abs() < 1e-6);
                assert!((u - 2.0 * 0.5f32.sin()).abs() < 1e-6);
            }
            other => panic!("expected in-range lookup, got {:?}", other),
        }
    }

    #[test]
    fn sample_addresses_the_expected_cell() {
        // Constant direction 0 so v equals magnitude and u is 0
        let mag = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let dir = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let field = WindField::from_polar(&mag, &dir, 2, 2, unit_bounds());

        // (y, x) = (0.5, -0.5) -> row 1, col 0
        assert_eq!(field.sample(0.5, -0.5), (3.0, 0.0));
        // (y, x) = (-0.5, 0.5) -> row 0, col 1
        assert_eq!(field.sample(-0.5, 0.5), (2.0, 0.0));
    }

    #[test]
    fn below_grid_queries_use_the_fixed_entry_velocities() {
        let mag = vec![vec![1.0; 2]; 2];
        let dir = vec![vec![0.0; 2]; 2];
        let field = WindField::from_polar(&mag, &dir, 2, 2, unit_bounds());

        // Below the grid, column inside the width
        assert_eq!(
            field.lookup(-1.5, 0.0),
            FieldLookup::BelowGrid { past_right: false }
        );
        assert_eq!(field.sample(-1.5, 0.0), BELOW_GRID_VELOCITY);

        // Below the grid, column past the right edge
        assert_eq!(
            field.lookup(-1.5, 2.5),
            FieldLookup::BelowGrid { past_right: true }
        );
        assert_eq!(field.sample(-1.5, 2.5), BELOW_GRID_PAST_RIGHT_VELOCITY);
    }

    #[test]
    fn other_off_grid_queries_read_as_calm() {
        let mag = vec![vec![1.0; 2]; 2];
        let dir = vec![vec![0.0; 2]; 2];
        let field = WindField::from_polar(&mag, &dir, 2, 2, unit_bounds());

        // Above the grid
        assert_eq!(field.lookup(1.5, 0.0), FieldLookup::OutOfRange);
        assert_eq!(field.sample(1.5, 0.0), (0.0, 0.0));

        // Left of the grid
        assert_eq!(field.lookup(0.0, -1.5), FieldLookup::OutOfRange);
        assert_eq!(field.sample(0.0, -1.5), (0.0, 0.0));
    }
}
