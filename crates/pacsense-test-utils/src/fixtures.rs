//! Reusable grid fixtures.
//!
//! The palette mirrors a rendered tiny-grid observation:
//!
//! - [`EMPTY`]: open floor.
//! - [`WALL_TILE`]: a maze wall (a real colour, unlike padding).
//! - [`FOOD`]: a pellet.
//! - [`AGENT`]: the Pacman cell, exactly one per grid.
//! - [`GHOST`]: a ghost.

use pacsense_core::{Color, GridBatch};

pub const EMPTY: Color = 0;
pub const WALL_TILE: Color = 1;
pub const FOOD: Color = 2;
pub const AGENT: Color = 3;
pub const GHOST: Color = 4;

/// Builds a single grid cell by cell.
///
/// Out-of-range positions panic: fixtures are written by hand and a
/// typo should fail loudly.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl GridBuilder {
    /// A `rows x cols` grid of [`EMPTY`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Overwrite every cell with `color`.
    pub fn fill(mut self, color: Color) -> Self {
        self.cells.fill(color);
        self
    }

    /// Set `(row, col)` to `color`.
    pub fn set(mut self, row: usize, col: usize, color: Color) -> Self {
        assert!(
            row < self.rows && col < self.cols,
            "({row},{col}) outside {}x{} fixture",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = color;
        self
    }

    /// Place the agent.
    pub fn agent(self, row: usize, col: usize) -> Self {
        self.set(row, col, AGENT)
    }

    /// Place a ghost.
    pub fn ghost(self, row: usize, col: usize) -> Self {
        self.set(row, col, GHOST)
    }

    /// Surround the grid with a ring of [`WALL_TILE`].
    pub fn border(mut self) -> Self {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if r == 0 || c == 0 || r + 1 == self.rows || c + 1 == self.cols {
                    self.cells[r * self.cols + c] = WALL_TILE;
                }
            }
        }
        self
    }

    /// The grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.cells.chunks(self.cols).map(<[Color]>::to_vec).collect()
    }

    /// A batch holding just this grid.
    pub fn build(&self) -> GridBatch {
        GridBatch::new(1, self.rows, self.cols, self.cells.clone())
            .expect("fixture dimensions must be non-zero")
    }
}

/// A batch of `n` copies of `rows`.
pub fn repeat_batch(rows: &[Vec<Color>], n: usize) -> GridBatch {
    let grids = vec![rows.to_vec(); n];
    GridBatch::from_nested(&grids).expect("fixture batch must be rectangular and non-empty")
}

/// A deterministic `batch` of `rows x cols` maze-like grids.
///
/// Each grid has a wall border, food on the floor, the agent at a
/// position that walks through the interior with the grid index, and
/// ghosts on a fixed lattice. Used by the benches, where the content
/// only needs to be realistic, not random.
pub fn maze_batch(batch: usize, rows: usize, cols: usize) -> GridBatch {
    assert!(rows >= 3 && cols >= 3, "maze fixtures need an interior");
    let interior = (rows - 2) * (cols - 2);
    let mut data = Vec::with_capacity(batch * rows * cols);
    for g in 0..batch {
        let agent = g % interior;
        let (ar, ac) = (1 + agent / (cols - 2), 1 + agent % (cols - 2));
        for r in 0..rows {
            for c in 0..cols {
                let color = if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                    WALL_TILE
                } else if (r, c) == (ar, ac) {
                    AGENT
                } else if (r * 7 + c * 3 + g) % 11 == 0 {
                    GHOST
                } else {
                    FOOD
                };
                data.push(color);
            }
        }
    }
    GridBatch::new(batch, rows, cols, data).expect("maze fixture dimensions must be non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_places_cells() {
        let rows = GridBuilder::new(2, 3).agent(0, 1).ghost(1, 2).to_rows();
        assert_eq!(rows, vec![vec![EMPTY, AGENT, EMPTY], vec![EMPTY, EMPTY, GHOST]]);
    }

    #[test]
    fn border_keeps_interior() {
        let rows = GridBuilder::new(3, 3).fill(FOOD).border().to_rows();
        assert_eq!(rows[1][1], FOOD);
        assert_eq!(rows[0], vec![WALL_TILE; 3]);
    }

    #[test]
    fn maze_has_one_agent_per_grid() {
        let batch = maze_batch(10, 6, 5);
        for g in batch.iter() {
            assert_eq!(g.count(AGENT), 1);
        }
    }
}
