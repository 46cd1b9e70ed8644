//! Result type alias for throwcard operations.

use super::card_error::CardError;

/// Type alias for Results using [`CardError`].
pub type CardResult<T> = Result<T, CardError>;
