//! Error types for grid construction and access.

use std::error::Error;
use std::fmt;

/// Errors arising from building or indexing a [`GridBatch`](crate::GridBatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A batch, row, or column dimension is zero.
    EmptyDimension {
        /// Which dimension was empty (`"batch"`, `"rows"`, `"cols"`).
        name: &'static str,
    },
    /// A dimension does not fit the signed offset arithmetic used by
    /// neighbour lookups.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The offending value.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// The flat buffer length does not equal `batch * rows * cols`.
    LengthMismatch {
        /// Length implied by the shape.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
    /// A row of a nested grid has a different width than the first row.
    RaggedRow {
        /// Index of the grid within the batch.
        grid: usize,
        /// Index of the offending row.
        row: usize,
        /// Width of the first row of the first grid.
        expected: usize,
        /// Width of the offending row.
        got: usize,
    },
    /// A grid of a nested batch has a different height than the first grid.
    ShapeMismatch {
        /// Index of the grid within the batch.
        grid: usize,
        /// Height of the first grid.
        expected: usize,
        /// Height of the offending grid.
        got: usize,
    },
    /// A grid index is past the end of the batch.
    IndexOutOfRange {
        /// Requested grid index.
        index: usize,
        /// Number of grids in the batch.
        len: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { name } => write!(f, "grid dimension '{name}' is zero"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid dimension '{name}' = {value} exceeds maximum {max}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "grid buffer has {got} cells, shape requires {expected}")
            }
            Self::RaggedRow {
                grid,
                row,
                expected,
                got,
            } => write!(
                f,
                "grid {grid} row {row} has {got} columns, expected {expected}"
            ),
            Self::ShapeMismatch {
                grid,
                expected,
                got,
            } => write!(f, "grid {grid} has {got} rows, expected {expected}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "grid index {index} out of range for batch of {len}")
            }
        }
    }
}

impl Error for GridError {}
