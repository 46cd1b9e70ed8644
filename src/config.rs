//! Card configuration.
//!
//! Resolution order, later wins:
//! 1. [`CardConfig::default`]
//! 2. `<config_dir>/throwcard/config.json`
//! 3. `THROWCARD_*` environment variables
//! 4. command-line flags (applied by the binary)
//!
//! Only the title is part of the card itself. The other fields configure the
//! snapshot provider and the time formatter.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::binder::time::DEFAULT_LOCALE;
use crate::error::{CardError, CardResult};

/// Title shown when none is configured.
pub const DEFAULT_TITLE: &str = "Latest Throw";

/// The upstream integration refreshes once per second.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

pub const ENV_TITLE: &str = "THROWCARD_TITLE";
pub const ENV_LOCALE: &str = "THROWCARD_LOCALE";
pub const ENV_SNAPSHOT: &str = "THROWCARD_SNAPSHOT";

/// Configuration for the card and its collaborators.
///
/// # Example
///
/// ```
/// use throwcard::config::CardConfig;
///
/// let config = CardConfig::default()
///     .with_title("Field Work")
///     .with_locale("de_DE");
/// assert_eq!(config.display_title(), "Field Work");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Card title; `None` shows [`DEFAULT_TITLE`]
    pub title: Option<String>,
    /// POSIX locale for weekday names and AM/PM
    pub locale: String,
    /// JSON file the file provider reads
    pub snapshot_path: Option<PathBuf>,
    /// Provider poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: None,
            locale: DEFAULT_LOCALE.to_string(),
            snapshot_path: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl CardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn with_poll_interval_ms(mut self, millis: u64) -> Self {
        self.poll_interval_ms = millis;
        self
    }

    /// Configured title, or the default label when unset or blank.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }

    /// Poll interval, never shorter than 10ms.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(10))
    }

    /// Default config file location (`<config_dir>/throwcard/config.json`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("throwcard").join("config.json"))
    }

    /// Snapshot file to read: the configured path, else
    /// `<data_local_dir>/throwcard/snapshot.json`.
    pub fn resolved_snapshot_path(&self) -> Option<PathBuf> {
        self.snapshot_path.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("throwcard").join("snapshot.json"))
        })
    }

    /// Load from the default location, then apply environment overrides.
    ///
    /// A missing config file is not an error.
    pub fn load() -> CardResult<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.apply_env())
    }

    /// Load from an explicit file. Missing file yields defaults.
    pub fn load_from(path: &Path) -> CardResult<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| CardError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply `THROWCARD_*` environment overrides.
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(title) = non_empty(ENV_TITLE) {
            self.title = Some(title);
        }
        if let Some(locale) = non_empty(ENV_LOCALE) {
            self.locale = locale;
        }
        if let Some(path) = non_empty(ENV_SNAPSHOT) {
            self.snapshot_path = Some(PathBuf::from(path));
        }
        self
    }
}
