//! Seed content for a fresh session root.

use super::node::{DirectoryNode, FileNode};

pub const SEED_FILE1: (&str, &str) = ("file1.txt", "Hello, this is file1!");
pub const SEED_FILE2: (&str, &str) = ("file2.txt", "Welcome to your second file!");
pub const SEED_DIRECTORY: &str = "directory1";

/// Build the root directory every session starts with.
pub fn seeded_root() -> DirectoryNode {
    let mut root = DirectoryNode::new();
    for (name, content) in [SEED_FILE1, SEED_FILE2] {
        root.children
            .insert(name.to_string(), FileNode::new(content).into());
    }
    root.children
        .insert(SEED_DIRECTORY.to_string(), DirectoryNode::new().into());
    root
}
