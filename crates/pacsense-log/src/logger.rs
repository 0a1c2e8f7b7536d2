//! Named loggers with their own sinks and threshold.
//!
//! Every [`Logger`] owns a private tracing [`Dispatch`]. Messages sent
//! through the logger's methods, or emitted with the `tracing` macros
//! inside [`Logger::in_scope`], reach only that logger's sinks, so two
//! loggers writing to different files never see each other's lines.

use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{dispatcher, Dispatch, Level};
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

use crate::error::LogError;
use crate::format::BracketFormat;
use crate::level::OutputLevel;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Where a logger writes.
pub enum LogSink {
    /// Standard output.
    Stdout,
    /// A file, truncated when the logger is created.
    File(PathBuf),
    /// Any tracing writer.
    Writer(BoxMakeWriter),
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// A named logger.
///
/// Cloning is cheap and clones share sinks. Buffered file sinks are
/// flushed when the last clone is dropped.
#[derive(Clone)]
pub struct Logger {
    name: String,
    level: OutputLevel,
    dispatch: Dispatch,
    _guards: Arc<Vec<WorkerGuard>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("file_sinks", &self._guards.len())
            .finish()
    }
}

impl Logger {
    /// Name the logger was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Threshold below which messages are dropped.
    pub fn level(&self) -> OutputLevel {
        self.level
    }

    /// Run `f` with this logger as the thread's default subscriber.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Log at error level.
    pub fn error(&self, msg: impl fmt::Display) {
        self.emit(Level::ERROR, &msg);
    }

    /// Log at warning level.
    pub fn warn(&self, msg: impl fmt::Display) {
        self.emit(Level::WARN, &msg);
    }

    /// Log at info level.
    pub fn info(&self, msg: impl fmt::Display) {
        self.emit(Level::INFO, &msg);
    }

    /// Log at debug level.
    pub fn debug(&self, msg: impl fmt::Display) {
        self.emit(Level::DEBUG, &msg);
    }

    /// Log at trace level.
    pub fn trace(&self, msg: impl fmt::Display) {
        self.emit(Level::TRACE, &msg);
    }

    /// Log at a numeric level on the 10-per-step scale.
    ///
    /// Messages below the logger's own numeric threshold are dropped
    /// here, so two custom levels that share tracing's `TRACE` still
    /// filter against each other.
    pub fn log(&self, level: u8, msg: impl fmt::Display) {
        if level < self.level.numeric() {
            return;
        }
        let tracing_level = match level {
            40..=u8::MAX => Level::ERROR,
            30..=39 => Level::WARN,
            20..=29 => Level::INFO,
            10..=19 => Level::DEBUG,
            _ => Level::TRACE,
        };
        self.emit(tracing_level, &msg);
    }

    fn emit(&self, level: Level, msg: &dyn fmt::Display) {
        self.in_scope(|| {
            if level == Level::ERROR {
                tracing::error!("{msg}")
            } else if level == Level::WARN {
                tracing::warn!("{msg}")
            } else if level == Level::INFO {
                tracing::info!("{msg}")
            } else if level == Level::DEBUG {
                tracing::debug!("{msg}")
            } else {
                tracing::trace!("{msg}")
            }
        });
    }
}

/// Build a logger named `name` writing to every sink in `sinks`.
///
/// The threshold comes from [`OutputLevel::from_verbosity`]. Unless it is
/// `Warning`, the logger announces itself with an `Output level: ...`
/// line at its own level.
pub fn init_logger(verbosity: u32, name: &str, sinks: Vec<LogSink>) -> Result<Logger, LogError> {
    let level = OutputLevel::from_verbosity(verbosity);
    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(sinks.len());
    let mut guards = Vec::new();

    for sink in sinks {
        let writer = match sink {
            LogSink::Stdout => BoxMakeWriter::new(io::stdout),
            LogSink::Writer(w) => w,
            LogSink::File(path) => {
                let (writer, guard) = file_writer(&path)?;
                guards.push(guard);
                BoxMakeWriter::new(writer)
            }
        };
        layers.push(
            tracing_subscriber::fmt::layer()
                .event_format(BracketFormat::new())
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(level.level_filter())
                .boxed(),
        );
    }

    let logger = Logger {
        name: name.to_owned(),
        level,
        dispatch: Dispatch::new(tracing_subscriber::registry().with(layers)),
        _guards: Arc::new(guards),
    };
    match level {
        OutputLevel::Warning => {}
        OutputLevel::Info => logger.info(format_args!("Output level: {level}")),
        OutputLevel::Debug => logger.debug(format_args!("Output level: {level}")),
        OutputLevel::Custom(n) => logger.log(n, format_args!("Output level: {level}")),
    }
    Ok(logger)
}

/// Truncate `path` and open a buffered, non-rotating appender on it.
///
/// The buffer blocks the caller when full instead of dropping lines.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), LogError> {
    let file_name = path.file_name().ok_or_else(|| LogError::Appender {
        path: path.to_path_buf(),
        reason: "path has no file name".to_owned(),
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| LogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    // The appender opens in append mode.
    File::create(path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| LogError::Appender {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(NonBlockingBuilder::default().lossy(false).finish(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacsense_test_utils::CaptureWriter;

    /// Drop the `[YYYY/MM/DD HH:MM:SS] ` prefix.
    fn untimed(lines: Vec<String>) -> Vec<String> {
        lines.into_iter().map(|l| l[22..].to_owned()).collect()
    }

    fn captured(verbosity: u32) -> (Logger, CaptureWriter) {
        let capture = CaptureWriter::new();
        let logger = init_logger(
            verbosity,
            "test",
            vec![LogSink::Writer(BoxMakeWriter::new(capture.clone()))],
        )
        .unwrap();
        (logger, capture)
    }

    #[test]
    fn warning_level_is_silent_on_creation() {
        let (logger, capture) = captured(0);
        logger.info("hidden");
        logger.warn("shown");
        assert_eq!(untimed(capture.lines()), vec!["[WARNING] shown"]);
    }

    #[test]
    fn announces_output_level() {
        let (logger, capture) = captured(1);
        logger.debug("hidden");
        logger.info("Layout: small");
        assert_eq!(
            untimed(capture.lines()),
            vec!["[INFO] Output level: INFO", "[INFO] Layout: small"]
        );
    }

    #[test]
    fn debug_verbosity_passes_debug() {
        let (logger, capture) = captured(2);
        logger.debug("probe");
        assert_eq!(
            untimed(capture.lines()),
            vec!["[DEBUG] Output level: DEBUG", "[DEBUG] probe"]
        );
    }

    #[test]
    fn custom_levels_filter_numerically() {
        // verbosity 5 -> level 7
        let (logger, capture) = captured(5);
        assert_eq!(logger.level(), OutputLevel::Custom(7));
        logger.log(8, "kept");
        logger.log(6, "dropped");
        logger.log(20, "info");
        assert_eq!(
            untimed(capture.lines()),
            vec!["[TRACE] Output level: 7", "[TRACE] kept", "[INFO] info"]
        );
    }

    #[test]
    fn in_scope_routes_tracing_macros() {
        let (logger, capture) = captured(1);
        logger.in_scope(|| tracing::info!(episode = 4, "done"));
        tracing::info!("outside any logger");
        let lines = untimed(capture.lines());
        assert_eq!(lines.last().map(String::as_str), Some("[INFO] done episode=4"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn loggers_do_not_share_sinks() {
        let (a, cap_a) = captured(0);
        let (b, cap_b) = captured(0);
        a.warn("to a");
        b.warn("to b");
        assert_eq!(untimed(cap_a.lines()), vec!["[WARNING] to a"]);
        assert_eq!(untimed(cap_b.lines()), vec!["[WARNING] to b"]);
    }

    #[test]
    fn multiple_sinks_receive_the_same_line() {
        let (c1, c2) = (CaptureWriter::new(), CaptureWriter::new());
        let logger = init_logger(
            0,
            "pair",
            vec![
                LogSink::Writer(BoxMakeWriter::new(c1.clone())),
                LogSink::Writer(BoxMakeWriter::new(c2.clone())),
            ],
        )
        .unwrap();
        logger.error("boom");
        assert_eq!(c1.contents(), c2.contents());
        assert!(c1.contents().ends_with("[ERROR] boom\n"));
    }

    #[test]
    fn sink_debug_hides_writer() {
        assert_eq!(format!("{:?}", LogSink::Stdout), "Stdout");
        let w = LogSink::Writer(BoxMakeWriter::new(io::sink));
        assert_eq!(format!("{w:?}"), "Writer(..)");
    }
}
