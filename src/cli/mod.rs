//! CLI module for throwcard.
//!
//! The dispatcher runs before any terminal setup: `--version` and `--help`
//! print and exit, everything else returns the options for the card.
//!
//! ```ignore
//! use throwcard::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Run(options) => { /* interactive card */ }
//!     CliCommand::Print(options) => { /* one-shot render */ }
//!     _ => {}
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions, USAGE};
pub use version::{version_string, VERSION};
