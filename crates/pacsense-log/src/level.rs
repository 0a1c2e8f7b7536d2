//! Verbosity to output-level mapping.

use std::fmt;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

/// The threshold a logger emits at.
///
/// | verbosity | level |
/// |-----------|-------|
/// | 0 | `Warning` |
/// | 1 | `Info` |
/// | 2 | `Debug` |
/// | v ≥ 3 | `Custom(max(1, 12 - v))` |
///
/// Custom levels are numeric and all sit below debug (10), so they are
/// emitted on tracing's `TRACE` level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputLevel {
    /// Warnings and errors only.
    Warning,
    /// Progress messages.
    Info,
    /// Diagnostic detail.
    Debug,
    /// A numeric level between 1 and 9.
    Custom(u8),
}

impl OutputLevel {
    /// Map a verbosity count to a level.
    pub fn from_verbosity(verbosity: u32) -> Self {
        match verbosity {
            0 => OutputLevel::Warning,
            1 => OutputLevel::Info,
            2 => OutputLevel::Debug,
            v => OutputLevel::Custom(12u32.saturating_sub(v).max(1) as u8),
        }
    }

    /// Numeric severity on the conventional 10-per-step scale.
    pub fn numeric(self) -> u8 {
        match self {
            OutputLevel::Warning => 30,
            OutputLevel::Info => 20,
            OutputLevel::Debug => 10,
            OutputLevel::Custom(n) => n,
        }
    }

    /// The tracing level events at this threshold are emitted on.
    pub fn tracing_level(self) -> Level {
        match self {
            OutputLevel::Warning => Level::WARN,
            OutputLevel::Info => Level::INFO,
            OutputLevel::Debug => Level::DEBUG,
            OutputLevel::Custom(_) => Level::TRACE,
        }
    }

    /// Filter passing this level and everything more severe.
    pub fn level_filter(self) -> LevelFilter {
        LevelFilter::from_level(self.tracing_level())
    }
}

impl fmt::Display for OutputLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLevel::Warning => f.write_str("WARNING"),
            OutputLevel::Info => f.write_str("INFO"),
            OutputLevel::Debug => f.write_str("DEBUG"),
            OutputLevel::Custom(n) => write!(f, "{n}"),
        }
    }
}
