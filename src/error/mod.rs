//! Error types for throwcard.
//!
//! The binding and rendering core never fails: every bad input degrades to a
//! sentinel or to the unavailable card. The types here cover the collaborators
//! around it (snapshot files, configuration, the terminal) and the one
//! presentation-level failure the binder models explicitly:
//!
//! - [`CardError`]: I/O, JSON, configuration and terminal failures
//! - [`FormatError`]: throw-time formatting failures, collapsed to `"Error"`
//!   before they reach the renderer
//! - [`CardResult<T>`]: result alias over [`CardError`]

mod card_error;
mod format;
mod result;

pub use card_error::CardError;
pub use format::FormatError;
pub use result::CardResult;
