use crate::bench::harness::TARGET_INVOKE;
use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter directive for the configured level
pub fn filter_directive(config: &AppConfig) -> String {
    if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},{}=off", config.log_level, TARGET_INVOKE)
    }
}

/// Whether log lines are mirrored to stdout. Never when JSON goes to the file
/// only, nor when stdout carries a machine-readable report.
pub fn console_enabled(config: &AppConfig, stdout_is_report: bool) -> bool {
    !config.use_json && !stdout_is_report
}

pub fn init_logging(config: &AppConfig, stdout_is_report: bool) -> WorkerGuard {
    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = console_enabled(config, stdout_is_report)
            .then(|| fmt::layer().with_target(false).with_ansi(true));
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}
