//! CLI Tooling
//!
//! Command-line interface for the batch shell: the interactive loop plus
//! non-interactive script and one-shot execution.

use crate::config::{ConfigLoader, ShellConfig};
use crate::error::ApiError;
use crate::io::{LineSource, Terminal, TerminalOptions};
use crate::session::CdMode;
use crate::shell::{Interpreter, Transcript};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// batchsh - Simulated batch shell over an in-memory namespace
#[derive(Parser)]
#[command(name = "batchsh")]
#[command(about = "Simulated batch shell over an in-memory file namespace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Make `cd` move the current directory instead of only validating it
    #[arg(long, global = true)]
    pub navigate: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell (default)
    Repl,
    /// Run each line of a script file through a fresh session
    Run {
        /// Script file with one command per line
        script: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run each argument as one command line
    Exec {
        /// Command lines, e.g. "mkdir docs" "ls"
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Fold CLI overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut ShellConfig) {
        if self.navigate {
            config.cd_mode = CdMode::Navigate;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

/// CLI context holding the effective configuration
pub struct CliContext {
    config: ShellConfig,
}

impl CliContext {
    /// Load configuration and apply CLI overrides.
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path).map_err(|e| {
                ApiError::ConfigError(format!(
                    "Failed to load config from {}: {}",
                    path.display(),
                    e
                ))
            })?,
            None => ConfigLoader::load()?,
        };
        cli.apply_overrides(&mut config);
        Ok(Self { config })
    }

    pub fn from_config(config: ShellConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.config.cd_mode)
    }

    fn terminal_options(&self) -> TerminalOptions {
        TerminalOptions {
            prompt: self.config.prompt.clone(),
            banner: self.config.banner,
            echo_commands: self.config.echo_commands,
            color: self.config.color,
        }
    }

    /// Run the interactive loop over the given surfaces.
    pub fn repl<R, W>(&self, input: &mut R, output: W) -> Result<usize, ApiError>
    where
        R: LineSource + ?Sized,
        W: Write,
    {
        info!(cd_mode = ?self.config.cd_mode, "Starting interactive session");
        let mut interpreter = self.interpreter();
        let mut terminal = Terminal::new(output, self.terminal_options());
        terminal.run(&mut interpreter, input)
    }

    /// Execute a non-interactive command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Repl => Err(ApiError::ConfigError(
                "repl needs terminal surfaces; use CliContext::repl".to_string(),
            )),
            Commands::Run { script, format } => self.handle_run(script, format),
            Commands::Exec { lines } => {
                let mut interpreter = self.interpreter();
                let output: Vec<String> = lines
                    .iter()
                    .flat_map(|line| interpreter.execute(line))
                    .collect();
                Ok(output.join("\n"))
            }
            Commands::Config => Ok(toml::to_string_pretty(&self.config)?),
        }
    }

    fn handle_run(&self, script: &Path, format: &str) -> Result<String, ApiError> {
        if format != "text" && format != "json" {
            return Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                format
            )));
        }
        let file = std::fs::File::open(script).map_err(|e| {
            ApiError::ConfigError(format!("Failed to open script {}: {}", script.display(), e))
        })?;
        let lines = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        info!(script = %script.display(), lines = lines.len(), "Running script");

        let mut interpreter = self.interpreter();
        let transcript = Transcript::record(&mut interpreter, &lines);
        if format == "json" {
            transcript.to_json()
        } else {
            Ok(transcript.to_text().trim_end_matches('\n').to_string())
        }
    }
}
