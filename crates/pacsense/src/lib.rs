//! Pacsense: perception utilities for Pacman grid-world agents.
//!
//! This is the facade crate re-exporting the public API of the pacsense
//! sub-crates. Training code usually depends on `pacsense` alone.
//!
//! # Quick start
//!
//! ```rust
//! use pacsense::prelude::*;
//!
//! const AGENT: Color = 3;
//! const GHOST: Color = 4;
//!
//! // Two 4x4 grids: a ghost two cells above, then one diagonally down-right.
//! let grids = GridBatch::from_nested(&[
//!     vec![
//!         vec![0, GHOST, 0, 0],
//!         vec![0, 0, 0, 0],
//!         vec![0, AGENT, 0, 0],
//!         vec![0, 0, 0, 0],
//!     ],
//!     vec![
//!         vec![0, 0, 0, 0],
//!         vec![0, AGENT, 0, 0],
//!         vec![0, 0, GHOST, 0],
//!         vec![0, 0, 0, 0],
//!     ],
//! ])
//! .unwrap();
//!
//! let near = ProximityDetector::new(DetectorConfig::new(AGENT, GHOST, Radius::One)).unwrap();
//! assert!(near.detect_batch(&grids).unwrap().iter().all(|d| d.is_empty()));
//!
//! let far = detect(&grids, AGENT, GHOST, 2).unwrap();
//! assert_eq!(far, vec![[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 1.0]]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pacsense-core` | Grid batches, directions, grid errors, stats helpers |
//! | [`obs`] | `pacsense-obs` | Probe tables, padding, agent lookup, the detector |
//! | [`log`] | `pacsense-log` | Named loggers, run folders, run summaries |
//! | [`render`] | `pacsense-render` | Terminal and PGM display of images |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid data model and directions (`pacsense-core`).
///
/// [`types::GridBatch`] is the input of every detection call;
/// [`types::DirectionSet`] is its per-grid result.
pub use pacsense_core as types;

/// Ghost-proximity detection (`pacsense-obs`).
///
/// Build a [`obs::ProximityDetector`] once per colour pair and radius,
/// or call [`obs::detect`] for a one-shot `(B, 4)` matrix.
pub use pacsense_obs as obs;

/// Experiment logging (`pacsense-log`).
///
/// [`log::create_loggers`] sets up a run folder; [`log::initial_log`]
/// writes the run configuration into it.
pub use pacsense_log as log;

/// Image display (`pacsense-render`).
pub use pacsense_render as render;

/// Common imports for detector and logging code.
///
/// ```rust
/// use pacsense::prelude::*;
/// ```
pub mod prelude {
    // Grids and directions
    pub use pacsense_core::{Color, Direction, DirectionSet, GridBatch, GridView};

    // Detection
    pub use pacsense_obs::{detect, DetectorConfig, ProximityDetector, Radius};

    // Logging
    pub use pacsense_log::{create_loggers, init_logger, initial_log, LogSink, Logger, RunSummary};

    // Display
    pub use pacsense_render::{draw, save_pgm, ImageView};

    // Errors
    pub use pacsense_core::GridError;
    pub use pacsense_log::LogError;
    pub use pacsense_obs::DetectError;
    pub use pacsense_render::RenderError;
}
