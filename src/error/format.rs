//! Throw-time formatting failures.

use thiserror::Error;

/// Why a throw timestamp could not be turned into display text.
///
/// The binder logs these and shows `"Error"` in place of the time; they never
/// block the rest of the card.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("throw_time is not a number: {0}")]
    NotNumeric(String),

    #[error("throw_time {0} is outside the representable range")]
    OutOfRange(f64),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("formatter failed: {0}")]
    Formatter(String),
}
