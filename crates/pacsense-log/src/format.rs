//! Line format: `[YYYY/MM/DD HH:MM:SS] [LEVEL] message`.

use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `strftime` pattern of the timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Local wall-clock timestamps in [`TIMESTAMP_FORMAT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Label printed between the second pair of brackets.
///
/// Custom numeric levels (verbosity 3 and up) are emitted on tracing's
/// `TRACE` and labelled `TRACE`, not `Level 9` and so on.
pub fn level_label(level: &Level) -> &'static str {
    if *level == Level::WARN {
        "WARNING"
    } else {
        level.as_str()
    }
}

/// Event formatter producing one bracketed line per event.
///
/// Only the event's own fields are printed; span context is dropped so
/// log files stay one message per line.
#[derive(Clone, Debug, Default)]
pub struct BracketFormat<T = LocalTimestamp> {
    timer: T,
}

impl BracketFormat {
    /// Formatter stamped with local time.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> BracketFormat<T> {
    /// Use a custom timestamp source.
    pub fn with_timer(timer: T) -> Self {
        Self { timer }
    }
}

impl<S, N, T> FormatEvent<S, N> for BracketFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        writer.write_char('[')?;
        self.timer.format_time(&mut writer)?;
        write!(writer, "] [{}] ", level_label(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
