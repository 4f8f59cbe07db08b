//! Line-oriented input and output surfaces and the interactive loop.

use crate::error::ApiError;
use crate::shell::Interpreter;
use crate::store::NamespaceStore;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const BANNER_LINES: &[&str] = &[
    "Welcome to Web Batch Environment!",
    "Type \"help\" for a list of commands.",
];

/// Source of completed command lines.
pub trait LineSource {
    /// Next line without its terminator, or `None` once input is closed.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = String::new();
        if self.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}

/// Presentation settings for [`Terminal`].
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub prompt: String,
    pub banner: bool,
    pub echo_commands: bool,
    pub color: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            banner: true,
            echo_commands: false,
            color: false,
        }
    }
}

/// Line sink that writes complete lines and the prompt.
pub struct Terminal<W: Write> {
    out: W,
    options: TerminalOptions,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, options: TerminalOptions) -> Self {
        Self { out, options }
    }

    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        if self.options.color && line.starts_with("Error:") {
            writeln!(self.out, "{}", line.red())
        } else {
            writeln!(self.out, "{}", line)
        }
    }

    /// Signal readiness for the next line.
    pub fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "\n{}", self.options.prompt)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run the interactive loop until `input` is exhausted.
    ///
    /// Returns the number of lines processed.
    pub fn run<S, R>(
        &mut self,
        interpreter: &mut Interpreter<S>,
        input: &mut R,
    ) -> Result<usize, ApiError>
    where
        S: NamespaceStore,
        R: LineSource + ?Sized,
    {
        if self.options.banner {
            for line in BANNER_LINES {
                self.write_line(line)?;
            }
        }
        self.prompt()?;

        let mut processed = 0usize;
        while let Some(line) = input.next_line()? {
            if self.options.echo_commands {
                self.write_line(&format!("> {}", line.trim()))?;
            }
            for output in interpreter.execute(&line) {
                self.write_line(&output)?;
            }
            self.prompt()?;
            processed += 1;
        }
        debug!(processed, "Input closed");
        info!("Session ended");
        Ok(processed)
    }
}
