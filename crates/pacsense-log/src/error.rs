//! Errors raised while setting up log sinks.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure creating a log folder or file sink.
#[derive(Debug)]
pub enum LogError {
    /// Filesystem operation on `path` failed.
    Io {
        /// Folder or file being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file appender could not be built for `path`.
    Appender {
        /// Target log file.
        path: PathBuf,
        /// Appender's own description of the failure.
        reason: String,
    },
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Appender { path, reason } => {
                write!(f, "cannot open log file {}: {reason}", path.display())
            }
        }
    }
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Appender { .. } => None,
        }
    }
}
