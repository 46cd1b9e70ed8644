//! Unified error type for the snapshot, config and terminal layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the binding core.
///
/// None of these ever reach the renderer. The snapshot watcher keeps the last
/// snapshot through a transient read failure and otherwise falls back to an
/// empty snapshot, which binds to the unavailable card.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Snapshot unavailable: {0}")]
    Snapshot(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl CardError {
    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            CardError::Io(_) => "E_IO",
            CardError::Json(_) => "E_JSON",
            CardError::Config { .. } => "E_CONFIG",
            CardError::Snapshot(_) => "E_SNAPSHOT",
            CardError::Terminal(_) => "E_TERMINAL",
        }
    }

    /// Whether a later attempt can succeed without user action.
    ///
    /// A snapshot file that is missing or half-written usually fixes itself on
    /// the next poll; a broken config file does not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CardError::Io(_) | CardError::Json(_) | CardError::Snapshot(_)
        )
    }
}
