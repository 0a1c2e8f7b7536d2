//! Per-run set of named loggers sharing one output folder.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::LogError;
use crate::logger::{init_logger, LogSink, Logger};

/// Verbosity every logger from [`create_loggers`] is created with.
pub const RUN_VERBOSITY: u32 = 3;

/// Loggers of one run, keyed by name in creation order.
#[derive(Clone, Debug, Default)]
pub struct LoggerRegistry {
    loggers: IndexMap<String, Logger>,
}

impl LoggerRegistry {
    /// Logger registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Logger> {
        self.loggers.get(name)
    }

    /// Registered names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loggers.keys().map(String::as_str)
    }

    /// Number of loggers.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Whether no loggers are registered.
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// `(name, logger)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Logger)> {
        self.loggers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Create `folder` and one logger per name in it.
///
/// Each logger writes to `folder/{name}.log`, truncating any previous
/// run's file. Names containing `raw` log to their file only; all others
/// also echo to stdout. A repeated name replaces the earlier logger.
pub fn create_loggers<S: AsRef<str>>(
    folder: impl AsRef<Path>,
    names: &[S],
) -> Result<LoggerRegistry, LogError> {
    let folder = folder.as_ref();
    fs::create_dir_all(folder).map_err(|source| LogError::Io {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut loggers = IndexMap::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let mut sinks = vec![LogSink::File(folder.join(format!("{name}.log")))];
        if !name.contains("raw") {
            sinks.push(LogSink::Stdout);
        }
        let logger = init_logger(RUN_VERBOSITY, name, sinks)?;
        tracing::debug!(logger = name, folder = %folder.display(), "logger created");
        loggers.insert(name.to_owned(), logger);
    }
    Ok(LoggerRegistry { loggers })
}
