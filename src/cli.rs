//! Command-line parsing.
//!
//! monfocus takes exactly one positional argument, the [`Direction`].
//! Anything else is a usage error.

use crate::command::{parse_direction, Direction};

/// Usage text printed alongside argument errors.
pub const USAGE: &str = "usage: monfocus <left|right>

Focus the window in the middle of the monitor to the left or right of the
monitor holding the active window.";

/// Errors from command-line parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Arguments (left or right) are required")]
    Missing,
    #[error("Only one argument is allowed")]
    TooMany,
    #[error("Invalid args: {0}")]
    Invalid(String),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Direction, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    match args.as_slice() {
        [] => Err(CliError::Missing),
        [arg] => {
            let arg = arg.as_ref();
            parse_direction(arg).ok_or_else(|| CliError::Invalid(arg.to_lowercase()))
        }
        _ => Err(CliError::TooMany),
    }
}
