//! Namespace Store
//!
//! Holds the namespace tree and exposes single-name structural operations on
//! a directory. Directories are addressed by [`NodePath`]; user input never
//! reaches this layer as a multi-segment path.

pub mod memory;

use crate::error::StoreError;
use crate::tree::{DirectoryNode, Node};
use crate::types::{EntryKind, NodePath};

pub use memory::MemoryStore;

/// Namespace store interface
pub trait NamespaceStore {
    /// Resolve a directory path, failing if any segment is missing or a file.
    fn directory(&self, path: &NodePath) -> Result<&DirectoryNode, StoreError>;

    /// Look up `name` in the directory at `dir`.
    fn resolve_child(&self, dir: &NodePath, name: &str) -> Result<&Node, StoreError>;

    /// Insert a new entry; fails with `AlreadyExists` if `name` is taken.
    fn insert(&mut self, dir: &NodePath, name: &str, node: Node) -> Result<(), StoreError>;

    /// Put an entry regardless of what is there, returning the displaced node.
    fn replace(
        &mut self,
        dir: &NodePath,
        name: &str,
        node: Node,
    ) -> Result<Option<Node>, StoreError>;

    /// Remove `name` if it exists and is of the `expected` kind.
    fn remove(
        &mut self,
        dir: &NodePath,
        name: &str,
        expected: EntryKind,
    ) -> Result<Node, StoreError>;

    /// Child names of the directory at `dir`, in insertion order.
    fn list(&self, dir: &NodePath) -> Result<Vec<String>, StoreError> {
        Ok(self.directory(dir)?.children.keys().cloned().collect())
    }
}
