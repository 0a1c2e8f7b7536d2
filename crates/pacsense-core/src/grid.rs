//! Colour-coded grid batches.
//!
//! A rendered observation is a batch of `B` grids of shape `(H, W)`
//! stored row-major in one contiguous buffer. Each cell holds a small
//! integer colour code (agent, ghost, wall tile, food, ...). Grids are
//! read-only once constructed.

use crate::error::GridError;

/// Integer colour code of a rendered cell.
pub type Color = i32;

/// A cell of a padded grid: either a real colour or the wall sentinel.
///
/// The wall sentinel marks cells outside the original grid bounds. It is
/// a separate variant, so it can never compare equal to a real colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A cell of the original grid.
    Color(Color),
    /// Padding outside the original grid.
    Wall,
}

impl Cell {
    /// Whether this cell holds exactly `color`.
    pub fn is_color(self, color: Color) -> bool {
        matches!(self, Cell::Color(c) if c == color)
    }
}

/// Shape of a grid batch: `(batch, rows, cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of grids `B`.
    pub batch: usize,
    /// Grid height `H`.
    pub rows: usize,
    /// Grid width `W`.
    pub cols: usize,
}

impl GridShape {
    /// Largest accepted row or column count. Neighbour offsets are
    /// applied in `i32`, so every coordinate must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Cells per grid (`rows * cols`).
    pub fn grid_len(&self) -> usize {
        self.rows * self.cols
    }

    fn validate(&self) -> Result<usize, GridError> {
        for (name, value) in [
            ("batch", self.batch),
            ("rows", self.rows),
            ("cols", self.cols),
        ] {
            if value == 0 {
                return Err(GridError::EmptyDimension { name });
            }
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        self.rows
            .checked_mul(self.cols)
            .and_then(|n| n.checked_mul(self.batch))
            .ok_or_else(|| GridError::DimensionTooLarge {
                name: "batch",
                value: self.batch,
                max: usize::MAX / self.rows.saturating_mul(self.cols),
            })
    }
}

/// An owned batch of `B` colour-coded grids of identical shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBatch {
    shape: GridShape,
    data: Vec<Color>,
}

impl GridBatch {
    /// Wrap a flat row-major buffer of `batch * rows * cols` colours.
    ///
    /// # Examples
    ///
    /// ```
    /// use pacsense_core::GridBatch;
    ///
    /// let batch = GridBatch::new(2, 2, 3, vec![0; 12]).unwrap();
    /// assert_eq!(batch.len(), 2);
    /// assert_eq!(batch.grid(1).unwrap().cols(), 3);
    /// ```
    pub fn new(
        batch: usize,
        rows: usize,
        cols: usize,
        data: Vec<Color>,
    ) -> Result<Self, GridError> {
        let shape = GridShape { batch, rows, cols };
        let expected = shape.validate()?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build a batch from nested `grid -> row -> cell` vectors.
    ///
    /// Every row of every grid must have the width of the first row, and
    /// every grid the height of the first grid.
    pub fn from_nested(grids: &[Vec<Vec<Color>>]) -> Result<Self, GridError> {
        let rows = grids.first().map_or(0, Vec::len);
        let cols = grids
            .first()
            .and_then(|g| g.first())
            .map_or(0, Vec::len);
        let shape = GridShape {
            batch: grids.len(),
            rows,
            cols,
        };
        let expected = shape.validate()?;

        let mut data = Vec::with_capacity(expected);
        for (g, grid) in grids.iter().enumerate() {
            if grid.len() != rows {
                return Err(GridError::ShapeMismatch {
                    grid: g,
                    expected: rows,
                    got: grid.len(),
                });
            }
            for (r, row) in grid.iter().enumerate() {
                if row.len() != cols {
                    return Err(GridError::RaggedRow {
                        grid: g,
                        row: r,
                        expected: cols,
                        got: row.len(),
                    });
                }
                data.extend_from_slice(row);
            }
        }
        Ok(Self { shape, data })
    }

    /// Build a batch holding a single grid given as rows.
    pub fn single(rows: Vec<Vec<Color>>) -> Result<Self, GridError> {
        Self::from_nested(std::slice::from_ref(&rows))
    }

    /// Shape of the batch.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of grids.
    pub fn len(&self) -> usize {
        self.shape.batch
    }

    /// Whether the batch holds no grids.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow grid `index`.
    pub fn grid(&self, index: usize) -> Result<GridView<'_>, GridError> {
        if index >= self.shape.batch {
            return Err(GridError::IndexOutOfRange {
                index,
                len: self.shape.batch,
            });
        }
        let n = self.shape.grid_len();
        Ok(GridView {
            rows: self.shape.rows,
            cols: self.shape.cols,
            cells: &self.data[index * n..(index + 1) * n],
        })
    }

    /// Iterate the grids in batch order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = GridView<'_>> {
        let (rows, cols) = (self.shape.rows, self.shape.cols);
        self.data
            .chunks_exact(self.shape.grid_len())
            .map(move |cells| GridView { rows, cols, cells })
    }
}

/// A borrowed single `(H, W)` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridView<'a> {
    rows: usize,
    cols: usize,
    cells: &'a [Color],
}

impl<'a> GridView<'a> {
    /// Wrap a row-major slice of `rows * cols` colours.
    pub fn new(rows: usize, cols: usize, cells: &'a [Color]) -> Result<Self, GridError> {
        let shape = GridShape {
            batch: 1,
            rows,
            cols,
        };
        let expected = shape.validate()?;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Grid height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The row-major cells.
    pub fn cells(&self) -> &'a [Color] {
        self.cells
    }

    /// Colour at `(row, col)`, or `None` outside the grid.
    ///
    /// Takes signed coordinates so callers can read neighbour offsets
    /// without checking for underflow first.
    pub fn get(&self, row: i64, col: i64) -> Option<Color> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }
        Some(self.cells[row as usize * self.cols + col as usize])
    }

    /// Row-major positions of every cell equal to `color`.
    pub fn positions_of(&self, color: Color) -> impl Iterator<Item = (usize, usize)> + 'a {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == color)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Number of cells equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }
}
