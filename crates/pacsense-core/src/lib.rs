//! Core types for the pacsense grid-perception workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the colour-coded grid batches that rendered observations arrive as,
//! the four detection directions, grid error types, and the small
//! numeric helpers used for summary logging.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid;
pub mod stats;

pub use direction::{Direction, DirectionSet};
pub use error::GridError;
pub use grid::{Cell, Color, GridBatch, GridShape, GridView};
pub use stats::{compact_format, safe_max, safe_min};
