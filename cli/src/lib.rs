//! erased-array CLI library.
//!
//! This crate provides the demonstration program for the `erased-array`
//! crate. The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
