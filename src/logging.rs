//! Log file setup.
//!
//! The terminal UI owns stdout, so tracing output goes to
//! `<data_local_dir>/throwcard/throwcard.log`. The filter comes from
//! `THROWCARD_LOG` (e.g. `THROWCARD_LOG=throwcard=debug`), default `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::CardResult;

pub const ENV_LOG: &str = "THROWCARD_LOG";
const DEFAULT_FILTER: &str = "info";

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("throwcard").join("throwcard.log"))
}

/// Filter from `THROWCARD_LOG`, falling back to `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open (append) the log file, creating its directory.
pub fn open_log_file(path: &Path) -> CardResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber writing to the default log file.
///
/// Returns the log path on success. Failure leaves logging disabled and is
/// never fatal to the caller.
pub fn init_logging() -> Option<PathBuf> {
    let path = log_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("throwcard: logging disabled ({})", e);
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(path)
}
