//! Command interpreter: tokenizing, dispatch, and the command handlers.

pub mod help;
pub mod interpreter;
pub mod parse;
pub mod transcript;

pub use interpreter::{Interpreter, Output};
pub use parse::{parse_line, Command};
pub use transcript::{Transcript, TranscriptEntry};
