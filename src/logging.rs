//! Opt-in file logging for debugging sessions.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_VAR: &str = "INKPOST_LOG";

/// Initialize tracing with file output.
///
/// Disabled unless the `INKPOST_LOG` env var names a log file; `RUST_LOG`
/// controls the filter (default `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_VAR).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{base}.{timestamp}.{pid}` so concurrent app instances never write into
/// the same file.
fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
