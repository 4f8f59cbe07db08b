//! Tooling & Integration Layer
//!
//! Command-line entry points over the interpreter.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
