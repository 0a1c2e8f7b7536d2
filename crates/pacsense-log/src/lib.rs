//! Named, levelled loggers for pacsense runs.
//!
//! A run creates its loggers once with [`create_loggers`]: one file per
//! name under the run's folder, plus stdout for everything that is not a
//! raw data stream. Lines look like
//!
//! ```text
//! [2024/05/01 12:00:00] [INFO] Layout:           smallGrid
//! ```
//!
//! Loggers are built on `tracing`. Each one owns its dispatcher, so the
//! detector's own `tracing` events can be routed into a run logger with
//! [`Logger::in_scope`] without installing anything globally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod registry;
pub mod summary;

pub use error::LogError;
pub use format::{BracketFormat, LocalTimestamp};
pub use level::OutputLevel;
pub use logger::{init_logger, LogSink, Logger};
pub use registry::{create_loggers, LoggerRegistry};
pub use summary::{initial_log, RunSummary};
