//! Error types for proximity detection.

use pacsense_core::{Color, GridError};
use std::error::Error;
use std::fmt;

/// Errors reported at the boundary of detection.
///
/// Every variant is raised before any result is produced; detection
/// never returns a partial batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetectError {
    /// The grid input itself is malformed.
    Grid(GridError),
    /// A grid contains no cell of the centre colour.
    MissingCenter {
        /// Index of the grid within the batch.
        grid: usize,
        /// The centre colour searched for.
        color: Color,
    },
    /// A grid contains more than one cell of the centre colour.
    AmbiguousCenter {
        /// Index of the grid within the batch.
        grid: usize,
        /// The centre colour searched for.
        color: Color,
        /// Number of matching cells.
        count: usize,
    },
    /// The requested radius is not 1, 2 or 3.
    RadiusOutOfRange {
        /// The rejected value.
        value: i64,
    },
    /// The caller-provided output buffer has the wrong length.
    OutputSize {
        /// Required length (`batch * 4`).
        expected: usize,
        /// Supplied length.
        got: usize,
    },
    /// A detector configuration failed validation.
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::MissingCenter { grid, color } => {
                write!(f, "grid {grid} has no cell of centre colour {color}")
            }
            Self::AmbiguousCenter { grid, color, count } => write!(
                f,
                "grid {grid} has {count} cells of centre colour {color}, expected exactly one"
            ),
            Self::RadiusOutOfRange { value } => {
                write!(f, "radius {value} out of range, expected 1, 2 or 3")
            }
            Self::OutputSize { expected, got } => {
                write!(f, "output buffer has {got} slots, expected {expected}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid detector config: {reason}"),
        }
    }
}

impl Error for DetectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DetectError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
