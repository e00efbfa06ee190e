//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, and the render command.

mod args;
mod commands;
mod enums;

pub use args::Args;
pub use commands::{run, CliError};
