//! Ghost-proximity feature extraction for pacsense.
//!
//! Given a batch of rendered grids, the colour of the agent's cell and
//! the colour of ghost cells, [`ProximityDetector`] produces one
//! [`DirectionSet`](pacsense_core::DirectionSet) per grid telling the
//! policy in which of the four directions a ghost is within reach.
//!
//! Reach is tiered by [`Radius`]:
//!
//! | Radius | Probes added |
//! |--------|--------------|
//! | 1 | the four orthogonal neighbours |
//! | 2 | orthogonal cells at distance 2, both diagonal assignments |
//! | 3 | orthogonal cells at distance 3, knight offsets |
//!
//! Taken together the tiers have a closed form: a direction is set when
//! a ghost lies strictly on that side of the agent within Manhattan
//! distance `radius`. Diagonal and knight cells lie on two sides at once
//! and mark both directions.
//!
//! The offset tables live in [`offsets`]; [`ProbePlan`] compiles them for
//! a radius once and evaluates them against a padded copy of each grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod detector;
pub mod error;
pub mod locate;
pub mod offsets;
pub mod padding;
pub mod plan;
pub mod radius;

pub use config::DetectorConfig;
pub use detector::{detect, ProximityDetector};
pub use error::DetectError;
pub use locate::{agent_coordinate_lookup, locate_centers, locate_unique};
pub use offsets::Probe;
pub use padding::PaddedGrid;
pub use plan::ProbePlan;
pub use radius::Radius;
