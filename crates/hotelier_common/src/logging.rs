//! Logging utilities for the Hotelier services.
//!
//! Every crate logs through the `tracing` macros; this module owns the subscriber setup.

use hotelier_config::LoggingConfig;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, otherwise the workspace crates log at `level`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("hotelier={level},tower_http={level}")))
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()))
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Uses `try_init` so calling it twice (e.g. from tests) is harmless.
pub fn init_with_level(level: Level) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(build_filter(level.as_str()))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize logging from configuration.
///
/// When `directory` is set, a daily rolling file is written next to stdout output.
/// The returned guard must be kept alive for the file writer to flush.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = build_filter(&config.level);
    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "hotelier.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let result = tracing_subscriber::registry()
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .with(filter)
                .try_init();
            if result.is_ok() {
                info!(
                    "Logging initialized at level {} (files in {})",
                    config.level, directory
                );
            }
            Some(guard)
        }
        None => {
            let result = tracing_subscriber::registry()
                .with(stdout_layer)
                .with(filter)
                .try_init();
            if result.is_ok() {
                info!("Logging initialized at level: {}", config.level);
            }
            None
        }
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the result unchanged so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => tracing::error!("{}: {}", error_context, e),
    }
    result
}
