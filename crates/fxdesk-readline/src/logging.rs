use anyhow::Result;
use fxdesk_infrastructure::paths::FxPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Routes `tracing` output to a daily log file so it never interleaves
/// with the prompt. `RUST_LOG` overrides the default `info` level.
///
/// The returned guard flushes buffered lines on drop and must live until exit.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = FxPaths::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::daily(&log_dir, "fxdesk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}
