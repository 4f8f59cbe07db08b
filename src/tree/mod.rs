//! Namespace tree: directory and file nodes plus the seed layout.

pub mod node;
pub mod seed;

pub use node::{DirectoryNode, FileNode, Node};
