//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// erased-array - walk through a resizable array of type-erased elements
#[derive(Parser, Debug)]
#[command(name = "erased-array", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log array reallocations and bulk operations to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store 3D points and look one up
    Points(CountArgs),

    /// Map, filter and reduce a range of integers
    Ints(CountArgs),

    /// Duplicate an array of owned strings
    Strings(CountArgs),
}

/// Largest `--count` accepted. Every index up to it is exact as both an
/// `i32` and an `f32`.
pub const MAX_COUNT: u32 = 1 << 24;

/// Arguments shared by every demonstration.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Number of elements to push
    #[arg(
        long,
        short,
        default_value_t = 16,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_COUNT)),
    )]
    pub count: u32,
}
