//! Version command for throwcard.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line as printed by `--version`.
pub fn version_string() -> String {
    format!("throwcard {}", VERSION)
}
