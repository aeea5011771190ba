use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "jp2roma-trace.jsonl";

/// Keeps the trace file writer alive; buffered events are flushed on drop.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _appender: Option<tracing_appender::non_blocking::WorkerGuard>,
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "roma_core=debug,roma_cli=debug"
        } else {
            "warn"
        })
    })
}

/// Install the global subscriber: human-readable events on stderr, plus a
/// JSONL file in `trace_dir` when given.
#[cfg(feature = "trace")]
pub fn init_tracing(verbose: bool, trace_dir: Option<&Path>) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;

    let (json, guard) = match trace_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, TRACE_FILE);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(json)
        .try_init();

    TraceGuard { _appender: guard }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(verbose: bool, _trace_dir: Option<&Path>) -> TraceGuard {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    TraceGuard {}
}
