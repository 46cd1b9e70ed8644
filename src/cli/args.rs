//! Command-line argument parsing for throwcard.
//!
//! ```text
//! throwcard [--snapshot <path>] [--title <text>] [--locale <code>] [--print]
//! throwcard --version
//! ```

use std::path::PathBuf;

use crate::config::CardConfig;

/// Overrides collected from flags, applied on top of the loaded config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub snapshot: Option<PathBuf>,
    pub title: Option<String>,
    pub locale: Option<String>,
}

impl CliOptions {
    /// Apply the flag overrides to `config`.
    pub fn apply(&self, mut config: CardConfig) -> CardConfig {
        if let Some(path) = &self.snapshot {
            config = config.with_snapshot_path(path.clone());
        }
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        if let Some(locale) = &self.locale {
            config = config.with_locale(locale.clone());
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Render the card once to stdout
    Print(CliOptions),
    /// Run the interactive card (default)
    Run(CliOptions),
    /// Bad arguments, with the message to show
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: throwcard [OPTIONS]

Options:
  --snapshot <path>  JSON snapshot or throw payload to display
  --title <text>     Card title (default: Latest Throw)
  --locale <code>    Locale for the throw time, e.g. en_US
  --print            Render once to stdout and exit
  -V, --version      Print version
  -h, --help         Print this help";

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use throwcard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["throwcard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut print = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--print" => print = true,
            "--snapshot" | "--title" | "--locale" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                match flag.as_str() {
                    "--snapshot" => options.snapshot = Some(PathBuf::from(value)),
                    "--title" => options.title = Some(value),
                    _ => options.locale = Some(value),
                }
            }
            other => return CliCommand::Invalid(format!("unknown argument: {}", other)),
        }
    }

    if print {
        CliCommand::Print(options)
    } else {
        CliCommand::Run(options)
    }
}
