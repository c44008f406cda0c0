use time::{format_description::FormatItem, macros::format_description, UtcOffset};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::time::OffsetTime, EnvFilter};

type Timer = OffsetTime<&'static [FormatItem<'static>]>;

/// The local offset is read once, here; `time` refuses to read it later
/// from a multi-threaded process, so this falls back to UTC when it can't.
fn timer() -> Timer {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(
        offset,
        format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
    )
}

/// Installs the global subscriber: local timestamps, `RUST_LOG` filtering
/// (default `info`), non-blocking writes to stderr.
///
/// Call before starting any runtime threads. Keep the returned guard alive
/// until exit or buffered lines are lost.
pub fn init_logger() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // a second install (tests, repeated calls) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer())
        .with_writer(writer)
        .try_init();
    guard
}
