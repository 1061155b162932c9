//! Error handling utilities for the CLI.

use std::error::Error as _;

use erased_array::ArrayError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, ArrayError>;

/// Print an error and its causes to stderr and exit with code 1.
pub fn render_and_exit(error: ArrayError) -> ! {
    tracing::debug!(?error, "command failed");
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::exit(1);
}
