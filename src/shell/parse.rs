//! Command line tokenizer.
//!
//! Lines split on single spaces. The first token selects the command; empty
//! tokens left by repeated spaces are skipped when picking name arguments.

use crate::error::CommandError;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Whitespace-only input.
    Blank,
    Help,
    Echo { text: String },
    Ls,
    Cd { dir: String },
    Cat { file: String },
    Mkdir { dir: String },
    Rmdir { dir: String },
    Copy { source: String, destination: String },
    Del { file: String },
}

impl Command {
    /// Command word as typed, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Blank => "",
            Command::Help => "help",
            Command::Echo { .. } => "echo",
            Command::Ls => "ls",
            Command::Cd { .. } => "cd",
            Command::Cat { .. } => "cat",
            Command::Mkdir { .. } => "mkdir",
            Command::Rmdir { .. } => "rmdir",
            Command::Copy { .. } => "copy",
            Command::Del { .. } => "del",
        }
    }
}

pub const USAGE_CD: &str = "cd [directory]";
pub const USAGE_CAT: &str = "cat [file]";
pub const USAGE_TYPE: &str = "type [file]";
pub const USAGE_MKDIR: &str = "mkdir [directory]";
pub const USAGE_RMDIR: &str = "rmdir [directory]";
pub const USAGE_COPY: &str = "copy [source] [destination]";
pub const USAGE_DEL: &str = "del [file]";

/// Parse one input line into a [`Command`].
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Blank);
    }

    let mut tokens = line.split(' ');
    let command = tokens.next().unwrap_or_default();
    let arguments: Vec<&str> = tokens.collect();
    let mut names = arguments.iter().copied().filter(|t| !t.is_empty());

    let mut required = |usage: &'static str| {
        names
            .next()
            .map(str::to_string)
            .ok_or(CommandError::MissingArgument { usage })
    };

    let parsed = match command {
        "help" => Command::Help,
        "echo" => Command::Echo {
            text: arguments.join(" "),
        },
        "ls" => Command::Ls,
        "cd" => Command::Cd {
            dir: required(USAGE_CD)?,
        },
        "cat" => Command::Cat {
            file: required(USAGE_CAT)?,
        },
        "type" => Command::Cat {
            file: required(USAGE_TYPE)?,
        },
        "mkdir" => Command::Mkdir {
            dir: required(USAGE_MKDIR)?,
        },
        "rmdir" => Command::Rmdir {
            dir: required(USAGE_RMDIR)?,
        },
        "copy" => {
            let source = required(USAGE_COPY)?;
            let destination = required(USAGE_COPY)?;
            Command::Copy {
                source,
                destination,
            }
        }
        "del" => Command::Del {
            file: required(USAGE_DEL)?,
        },
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(parsed)
}
