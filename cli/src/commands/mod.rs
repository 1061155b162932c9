//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod ints;
pub mod points;
pub mod strings;
