//! In-memory namespace store rooted at a single directory.

use super::NamespaceStore;
use crate::error::StoreError;
use crate::tree::{seed, DirectoryNode, Node};
use crate::types::{EntryKind, NodePath};

/// Memory-resident namespace; dropped with the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    root: DirectoryNode,
}

impl MemoryStore {
    /// Create a store whose root holds the standard seed entries.
    pub fn seeded() -> Self {
        Self {
            root: seed::seeded_root(),
        }
    }

    fn directory_mut(&mut self, path: &NodePath) -> Result<&mut DirectoryNode, StoreError> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            let node = current
                .children
                .get_mut(segment)
                .ok_or_else(|| StoreError::NotFound(segment.clone()))?;
            current = node.as_directory_mut().ok_or_else(|| StoreError::WrongKind {
                name: segment.clone(),
                expected: EntryKind::Directory,
            })?;
        }
        Ok(current)
    }
}

impl NamespaceStore for MemoryStore {
    fn directory(&self, path: &NodePath) -> Result<&DirectoryNode, StoreError> {
        let mut current = &self.root;
        for segment in path.segments() {
            let node = current
                .children
                .get(segment)
                .ok_or_else(|| StoreError::NotFound(segment.clone()))?;
            current = node.as_directory().ok_or_else(|| StoreError::WrongKind {
                name: segment.clone(),
                expected: EntryKind::Directory,
            })?;
        }
        Ok(current)
    }

    fn resolve_child(&self, dir: &NodePath, name: &str) -> Result<&Node, StoreError> {
        self.directory(dir)?
            .children
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn insert(&mut self, dir: &NodePath, name: &str, node: Node) -> Result<(), StoreError> {
        let directory = self.directory_mut(dir)?;
        if directory.children.contains_key(name) {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }
        directory.children.insert(name.to_string(), node);
        Ok(())
    }

    fn replace(
        &mut self,
        dir: &NodePath,
        name: &str,
        node: Node,
    ) -> Result<Option<Node>, StoreError> {
        let directory = self.directory_mut(dir)?;
        Ok(directory.children.insert(name.to_string(), node))
    }

    fn remove(
        &mut self,
        dir: &NodePath,
        name: &str,
        expected: EntryKind,
    ) -> Result<Node, StoreError> {
        let directory = self.directory_mut(dir)?;
        match directory.children.get(name) {
            None => return Err(StoreError::NotFound(name.to_string())),
            Some(node) if node.kind() != expected => {
                return Err(StoreError::WrongKind {
                    name: name.to_string(),
                    expected,
                })
            }
            Some(_) => {}
        }
        // shift_remove keeps the listing order of the remaining siblings
        directory
            .children
            .shift_remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
