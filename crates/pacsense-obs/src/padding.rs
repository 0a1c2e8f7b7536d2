//! Wall-padded grid copies.
//!
//! Before probing, each grid is surrounded by `radius - 1` rings of
//! [`Cell::Wall`] so that the diagonal and knight offsets around an agent
//! on the border land on wall instead of off the grid. Probes that reach
//! past the padding (the outermost orthogonal step) also read as wall.

use pacsense_core::{Cell, GridView};

/// A grid copy with `pad` wall cells added on every side.
///
/// The buffer is reused across grids of a batch via
/// [`fill_from`](PaddedGrid::fill_from).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedGrid {
    rows: usize,
    cols: usize,
    pad: usize,
    cells: Vec<Cell>,
}

impl PaddedGrid {
    /// Pad `grid` with `pad` wall cells on each side.
    pub fn new(grid: &GridView<'_>, pad: usize) -> Self {
        let mut padded = Self {
            rows: 0,
            cols: 0,
            pad,
            cells: Vec::new(),
        };
        padded.fill_from(grid);
        padded
    }

    /// Replace the contents with a padded copy of `grid`, keeping the
    /// allocation.
    pub fn fill_from(&mut self, grid: &GridView<'_>) {
        self.rows = grid.rows() + 2 * self.pad;
        self.cols = grid.cols() + 2 * self.pad;
        self.cells.clear();
        self.cells.resize(self.rows * self.cols, Cell::Wall);
        for (r, row) in grid.cells().chunks_exact(grid.cols()).enumerate() {
            let start = (r + self.pad) * self.cols + self.pad;
            for (dst, &c) in self.cells[start..start + row.len()].iter_mut().zip(row) {
                *dst = Cell::Color(c);
            }
        }
    }

    /// Padded height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Padded width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Map an original-grid position into padded space.
    pub fn to_padded(&self, (row, col): (usize, usize)) -> (usize, usize) {
        (row + self.pad, col + self.pad)
    }

    /// Cell at `(row, col)` of the padded grid, or [`Cell::Wall`] outside it.
    pub fn get(&self, row: i64, col: i64) -> Cell {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return Cell::Wall;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    /// Cell at a `(dr, dc)` offset from a padded-space position.
    pub fn offset(&self, (row, col): (usize, usize), dr: i32, dc: i32) -> Cell {
        self.get(row as i64 + i64::from(dr), col as i64 + i64::from(dc))
    }
}
