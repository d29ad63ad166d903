//! File logging for the binary.
//!
//! The terminal belongs to the UI, so log output goes to a file: the
//! configured `log_file`, or `minitodo.log` in the platform data directory.
//! The filter comes from the configured `log_level`; the environment is not
//! consulted. If the file cannot be opened the program runs without logging.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use minitodo::config::TodoConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILENAME: &str = "minitodo.log";
const FALLBACK_LEVEL: &str = "warn";

/// Installs the global subscriber. Returns whether logging is active.
pub fn init(config: &TodoConfig, data_dir: Option<&Path>) -> bool {
    let Some(path) = log_path(config, data_dir) else {
        return false;
    };
    let Ok(file) = open_log(&path) else {
        return false;
    };

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter(&config.log_level))
        .with(layer)
        .try_init()
        .is_ok()
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

fn log_path(config: &TodoConfig, data_dir: Option<&Path>) -> Option<PathBuf> {
    match (&config.log_file, data_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => Some(dir.join(LOG_FILENAME)),
        (None, None) => None,
    }
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
