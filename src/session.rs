//! Shell session: the namespace store plus the current-directory cursor.
//!
//! A session is created once at startup and owned by the interpreter loop.

use crate::error::StoreError;
use crate::store::{MemoryStore, NamespaceStore};
use crate::types::{EntryKind, NodePath};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How `cd` treats the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CdMode {
    /// Validate the target and report success, leaving the cursor at the root.
    #[default]
    Validate,
    /// Move the cursor; `..` goes to the parent and `/` to the root.
    Navigate,
}

/// Name that moves the cursor to the parent directory.
pub const PARENT_DIR: &str = "..";
/// Name that moves the cursor back to the root.
pub const ROOT_DIR: &str = "/";

/// Shell session state: the namespace tree and the current directory
///
/// All single-name commands resolve against [`Session::cwd`].
pub struct Session<S: NamespaceStore = MemoryStore> {
    store: S,
    cwd: NodePath,
    cd_mode: CdMode,
}

impl Session<MemoryStore> {
    /// Fresh session over the seeded in-memory tree.
    pub fn new(cd_mode: CdMode) -> Self {
        info!(?cd_mode, "Starting session with seeded namespace");
        Self::with_store(MemoryStore::seeded(), cd_mode)
    }
}

impl Default for Session<MemoryStore> {
    fn default() -> Self {
        Self::new(CdMode::default())
    }
}

impl<S: NamespaceStore> Session<S> {
    pub fn with_store(store: S, cd_mode: CdMode) -> Self {
        Self {
            store,
            cwd: NodePath::root(),
            cd_mode,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current directory all single-name commands operate on.
    pub fn cwd(&self) -> &NodePath {
        &self.cwd
    }

    /// Validate `target` as a directory and, in navigate mode, move there.
    ///
    /// The cursor only changes when this returns `Ok`.
    pub fn change_directory(&mut self, target: &str) -> Result<(), StoreError> {
        if self.cd_mode == CdMode::Navigate {
            match target {
                PARENT_DIR => {
                    self.cwd = self.cwd.parent();
                    debug!(cwd = %self.cwd, "Moved cursor to parent");
                    return Ok(());
                }
                ROOT_DIR => {
                    self.cwd = NodePath::root();
                    debug!("Moved cursor to root");
                    return Ok(());
                }
                _ => {}
            }
        }

        let node = self.store.resolve_child(&self.cwd, target)?;
        if node.kind() != EntryKind::Directory {
            return Err(StoreError::WrongKind {
                name: target.to_string(),
                expected: EntryKind::Directory,
            });
        }

        if self.cd_mode == CdMode::Navigate {
            self.cwd = self.cwd.join(target);
            debug!(cwd = %self.cwd, "Moved cursor");
        }
        Ok(())
    }
}
