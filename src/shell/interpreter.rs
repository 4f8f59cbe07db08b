//! Command interpreter: dispatches parsed lines to handlers against a session.
//!
//! Every handler either applies its mutation fully or leaves the tree as it
//! was; failures come back as a single output line.

use super::help::help_lines;
use super::parse::{parse_line, Command};
use crate::error::CommandError;
use crate::session::{CdMode, Session};
use crate::store::{MemoryStore, NamespaceStore};
use crate::tree::{DirectoryNode, FileNode, Node};
use crate::types::EntryKind;
use tracing::{debug, info, warn};

/// Output lines produced by one command.
pub type Output = Vec<String>;

type HandlerResult = Result<Output, CommandError>;

/// Line interpreter owning one [`Session`]
pub struct Interpreter<S: NamespaceStore = MemoryStore> {
    session: Session<S>,
}

impl Interpreter<MemoryStore> {
    /// Interpreter over a fresh seeded session.
    pub fn new(cd_mode: CdMode) -> Self {
        Self::with_session(Session::new(cd_mode))
    }
}

impl Default for Interpreter<MemoryStore> {
    fn default() -> Self {
        Self::new(CdMode::default())
    }
}

impl<S: NamespaceStore> Interpreter<S> {
    pub fn with_session(session: Session<S>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Process one line and return the lines to print.
    pub fn execute(&mut self, line: &str) -> Output {
        let result = parse_line(line).and_then(|command| {
            debug!(command = command.name(), cwd = %self.session.cwd(), "Dispatching command");
            self.dispatch(command)
        });
        match result {
            Ok(output) => output,
            Err(err) => {
                debug!(error = ?err, "Command failed");
                vec![err.to_string()]
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> HandlerResult {
        match command {
            Command::Blank => Ok(Vec::new()),
            Command::Help => Ok(help_lines()),
            Command::Echo { text } => Ok(vec![text]),
            Command::Ls => self.list(),
            Command::Cd { dir } => self.change_directory(dir),
            Command::Cat { file } => self.cat(file),
            Command::Mkdir { dir } => self.make_directory(dir),
            Command::Rmdir { dir } => self.remove_directory(dir),
            Command::Copy {
                source,
                destination,
            } => self.copy(source, destination),
            Command::Del { file } => self.delete(file),
        }
    }

    fn list(&self) -> HandlerResult {
        let cwd = self.session.cwd();
        let names = self.session.store().list(cwd).map_err(|err| {
            warn!(cwd = %cwd, error = %err, "Current directory no longer resolves");
            CommandError::DirectoryNotFound(cwd.to_string())
        })?;
        Ok(vec![names.join(" ")])
    }

    fn change_directory(&mut self, dir: String) -> HandlerResult {
        match self.session.change_directory(&dir) {
            Ok(()) => Ok(vec![format!("Changing to directory: {}", dir)]),
            Err(_) => Err(CommandError::DirectoryNotFound(dir)),
        }
    }

    fn cat(&self, file: String) -> HandlerResult {
        let node = self
            .session
            .store()
            .resolve_child(self.session.cwd(), &file)
            .ok();
        match node.and_then(Node::as_file) {
            Some(found) => Ok(vec![found.content.clone()]),
            None => Err(CommandError::FileNotFound(file)),
        }
    }

    fn make_directory(&mut self, dir: String) -> HandlerResult {
        validate_name(&dir)?;
        let cwd = self.session.cwd().clone();
        match self
            .session
            .store_mut()
            .insert(&cwd, &dir, DirectoryNode::new().into())
        {
            Ok(()) => {
                info!(name = %dir, cwd = %cwd, "Directory created");
                Ok(vec![format!("Directory created: {}", dir)])
            }
            Err(_) => Err(CommandError::DirectoryExists(dir)),
        }
    }

    fn remove_directory(&mut self, dir: String) -> HandlerResult {
        let cwd = self.session.cwd().clone();
        match self
            .session
            .store_mut()
            .remove(&cwd, &dir, EntryKind::Directory)
        {
            Ok(_) => {
                info!(name = %dir, cwd = %cwd, "Directory removed");
                Ok(vec![format!("Directory removed: {}", dir)])
            }
            Err(_) => Err(CommandError::DirectoryNotFound(dir)),
        }
    }

    fn copy(&mut self, source: String, destination: String) -> HandlerResult {
        let cwd = self.session.cwd().clone();
        let content = match self.session.store().resolve_child(&cwd, &source) {
            Ok(Node::File(file)) => file.content.clone(),
            _ => return Err(CommandError::SourceFileNotFound(source)),
        };
        validate_name(&destination)?;

        // Destination is overwritten without an existence check.
        let displaced = self
            .session
            .store_mut()
            .replace(&cwd, &destination, FileNode::new(content).into())
            .map_err(|err| {
                warn!(cwd = %cwd, error = %err, "Copy target directory no longer resolves");
                CommandError::DirectoryNotFound(cwd.to_string())
            })?;
        if let Some(previous) = displaced {
            debug!(name = %destination, kind = %previous.kind(), "Copy overwrote existing entry");
        }
        info!(source = %source, destination = %destination, "File copied");
        Ok(vec![format!("File copied: {}", destination)])
    }

    fn delete(&mut self, file: String) -> HandlerResult {
        let cwd = self.session.cwd().clone();
        match self.session.store_mut().remove(&cwd, &file, EntryKind::File) {
            Ok(_) => {
                info!(name = %file, cwd = %cwd, "File deleted");
                Ok(vec![format!("File deleted: {}", file)])
            }
            Err(_) => Err(CommandError::FileNotFound(file)),
        }
    }
}

/// Names that would collide with cursor navigation or path syntax.
fn validate_name(name: &str) -> Result<(), CommandError> {
    if name == "." || name == ".." || name.contains('/') {
        return Err(CommandError::InvalidName(name.to_string()));
    }
    Ok(())
}
