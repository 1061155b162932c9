//! erased-array CLI - demonstrations of a resizable type-erased array.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // --verbose wins over RUST_LOG; otherwise default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Command::Points(args) => commands::points::run(args),
        Command::Ints(args) => commands::ints::run(args),
        Command::Strings(args) => commands::strings::run(args),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e);
    }
}
