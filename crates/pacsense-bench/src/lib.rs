//! Benchmark profiles for pacsense detection.
//!
//! - [`reference_profile`]: 64 grids of 21x19, the size of a classic
//!   Pacman maze rendered one colour per tile
//! - [`stress_profile`]: 1024 grids of 64x64
//! - [`scatter_positions`]: deterministic, collision-free cell placement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use pacsense_core::{Color, GridBatch, GridError};

/// Floor colour.
pub const FLOOR: Color = 0;
/// Maze wall colour.
pub const WALL: Color = 1;
/// Agent colour.
pub const AGENT: Color = 3;
/// Ghost colour.
pub const GHOST: Color = 4;

/// Ghosts per grid.
pub const GHOSTS: u16 = 4;

/// 64 grids of 21x19 with a walled border, one agent and four ghosts.
pub fn reference_profile(seed: u64) -> Result<GridBatch, GridError> {
    build_profile(64, 21, 19, seed)
}

/// 1024 grids of 64x64, same layout rules as [`reference_profile`].
pub fn stress_profile(seed: u64) -> Result<GridBatch, GridError> {
    build_profile(1024, 64, 64, seed)
}

fn build_profile(
    batch: usize,
    rows: usize,
    cols: usize,
    seed: u64,
) -> Result<GridBatch, GridError> {
    let interior_cols = cols.saturating_sub(2);
    let interior = rows.saturating_sub(2) * interior_cols;
    let mut data = Vec::with_capacity(batch * rows * cols);
    for g in 0..batch {
        let mut grid = vec![FLOOR; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                    grid[r * cols + c] = WALL;
                }
            }
        }
        if interior > 0 {
            let placed = scatter_positions(interior, GHOSTS + 1, seed.wrapping_add(g as u64));
            for &(i, pos) in &placed {
                let (r, c) = (1 + pos / interior_cols, 1 + pos % interior_cols);
                grid[r * cols + c] = if i == 0 { AGENT } else { GHOST };
            }
        }
        data.extend_from_slice(&grid);
    }
    GridBatch::new(batch, rows, cols, data)
}

/// Place `n` items at distinct indices below `cell_count`.
///
/// Positions come from a multiplicative hash of the seed with linear
/// probing on collision. Returns `(item, flat_index)` pairs. `n` is
/// capped at `cell_count`.
pub fn scatter_positions(cell_count: usize, n: u16, seed: u64) -> Vec<(u16, usize)> {
    let n = n.min(u16::try_from(cell_count).unwrap_or(u16::MAX));
    let mut positions = Vec::with_capacity(usize::from(n));
    let mut occupied = HashSet::new();

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(u64::from(i).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;
        while !occupied.insert(pos) {
            pos = (pos + 1) % cell_count;
        }
        positions.push((i, pos));
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_has_one_agent_per_grid() {
        let batch = reference_profile(42).unwrap();
        assert_eq!(batch.len(), 64);
        for grid in batch.iter() {
            assert_eq!(grid.count(AGENT), 1);
            assert_eq!(grid.count(GHOST), usize::from(GHOSTS));
        }
    }

    #[test]
    fn stress_profile_shape() {
        let batch = stress_profile(7).unwrap();
        let shape = batch.shape();
        assert_eq!((shape.batch, shape.rows, shape.cols), (1024, 64, 64));
    }

    #[test]
    fn scatter_positions_no_collisions() {
        let positions = scatter_positions(100, 10, 42);
        assert_eq!(positions.len(), 10);
        let unique: HashSet<usize> = positions.iter().map(|&(_, p)| p).collect();
        assert_eq!(unique.len(), 10);
        assert!(positions.iter().all(|&(_, p)| p < 100));
    }

    #[test]
    fn scatter_positions_deterministic_and_capped() {
        assert_eq!(scatter_positions(1000, 5, 42), scatter_positions(1000, 5, 42));
        assert_eq!(scatter_positions(3, 10, 1).len(), 3);
    }
}
