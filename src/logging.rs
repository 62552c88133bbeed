// File logging. The terminal belongs to the UI, so tracing output goes to
// ~/.cache/sift/sift.log (or --log-file). RUST_LOG overrides the configured level.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::SiftError;

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Flushes buffered log lines when dropped; hold it for the life of the program.
pub struct LogGuard {
    _guard: WorkerGuard,
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("sift").join("sift.log"))
}

pub fn parse_level(level: &str) -> Result<&'static str, SiftError> {
    let wanted = level.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .copied()
        .find(|l| *l == wanted)
        .ok_or_else(|| SiftError::UnknownLogLevel(level.to_string()))
}

/// Install the global subscriber. Returns `None` (logging disabled) when the
/// log file can't be opened.
pub fn init(path: &Path, level: &str) -> Result<Option<LogGuard>> {
    let level = parse_level(level)?;
    let Ok(file) = open_log_file(path) else {
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(Some(LogGuard { _guard: guard }))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
