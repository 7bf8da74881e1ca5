//! Tracing subscriber setup.
//!
//! Filter resolution order:
//! 1. `WATERTAP_LOG` environment variable (EnvFilter syntax)
//! 2. `log_filter` from config
//! 3. `warn`
//!
//! Output goes to stderr unless `log_file` is configured, in which case a
//! non-blocking file writer is used. Hold the returned guard until exit so
//! buffered lines get flushed.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const LOG_ENV_VAR: &str = "WATERTAP_LOG";

/// Installs the global subscriber.
///
/// Returns `Ok(None)` when logging to stderr. Calling this twice is harmless:
/// the second install is ignored.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), &config.log_filter);

    match config.log_file.as_deref() {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Ok(Some(guard))
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
    }
}

fn build_filter(env_value: Option<&str>, configured: &str) -> EnvFilter {
    env_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_new(configured.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
