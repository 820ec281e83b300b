use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Directory for daily-rolling log files. No file layer when `None`.
    pub log_dir: Option<PathBuf>,
    /// Default filter level when `RUST_LOG` is unset.
    pub level: Option<String>,
}

pub fn init_logging(component: &str, options: &LogOptions) -> Option<WorkerGuard> {
    let level = options.level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    let Some(log_dir) = &options.log_dir else {
        let _ = registry.try_init();
        return None;
    };

    let _ = std::fs::create_dir_all(log_dir);

    // Roll daily, with the component name as the prefix
    // This will create files like generate.log.2024-01-21
    let file_appender = tracing_appender::rolling::daily(log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File layer: no ANSI colors, output to file
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let _ = registry.with(file_layer).try_init();

    Some(guard)
}
