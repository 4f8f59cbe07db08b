//! batchsh: Simulated Batch Shell
//!
//! A small command interpreter over an in-memory namespace of files and
//! directories, driven by a line-oriented terminal.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod session;
pub mod shell;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;

pub use session::{CdMode, Session};
pub use shell::Interpreter;
