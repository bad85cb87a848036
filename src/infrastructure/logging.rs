//! Durable file logging setup

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory the rolling log files land in
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tap-translate")
        .join("logs")
}

/// Initialize tracing with a daily-rolling, non-blocking file writer.
///
/// `file_prefix` separates the utility's log from the supervisor's so a
/// crash loop can be reconstructed from either side. The returned guard
/// must stay alive for the process lifetime; dropping it early loses
/// buffered lines.
pub fn init_tracing(file_prefix: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(log_dir(), file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .finish();

    // Ignore failure: a test harness may have installed a subscriber already
    let _ = tracing::subscriber::set_global_default(subscriber);

    guard
}
