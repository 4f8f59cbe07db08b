//! Shell configuration
//!
//! Layered settings for the interactive loop, the `cd` mode, and logging.
//! See [`ConfigLoader`] for source precedence.

mod facade;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::session::CdMode;
use serde::{Deserialize, Serialize};

fn default_prompt() -> String {
    "$ ".to_string()
}

fn default_true() -> bool {
    true
}

/// Top-level shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt written after each command, preceded by a newline
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the welcome banner when the REPL starts
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Write `> <line>` before each command's output
    #[serde(default)]
    pub echo_commands: bool,

    /// Whether `cd` moves the cursor or only validates the target
    #[serde(default)]
    pub cd_mode: CdMode,

    /// Paint error lines red in the REPL
    #[serde(default)]
    pub color: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_true(),
            echo_commands: false,
            cd_mode: CdMode::default(),
            color: false,
            logging: LoggingConfig::default(),
        }
    }
}
