//! Tracing subscriber setup for the host.

use agrimitra_core::config::LogSettings;
use agrimitra_infrastructure::AgriPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "agrimitra-desktop.log";

/// Installs the global subscriber: stderr always, plus a daily log file when
/// the log directory can be created.
///
/// `RUST_LOG` takes precedence over `settings.level`. Keep the returned guard
/// alive for the life of the process or buffered file output is lost.
pub fn init_logging(settings: &LogSettings) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let (file_layer, guard) = match open_log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();

    if installed.is_err() {
        // A subscriber was already set, e.g. by a test harness.
        return None;
    }
    guard
}

fn open_log_dir() -> Option<std::path::PathBuf> {
    let dir = AgriPaths::log_dir().ok()?;
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(e) => {
            eprintln!("[Logging] File logging disabled, cannot create {:?}: {}", dir, e);
            None
        }
    }
}
