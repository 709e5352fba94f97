//! Tree nodes and directory listing entries.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Kind of a file-system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A node in the virtual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    /// Named children. Names are unique by construction of the map.
    Directory(BTreeMap<String, FsNode>),
    /// File content, one entry per line.
    File(Vec<String>),
}

impl FsNode {
    pub fn kind(&self) -> EntryKind {
        match self {
            FsNode::Directory(_) => EntryKind::Directory,
            FsNode::File(_) => EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FsNode::Directory(_))
    }

    /// Size in bytes as reported by `ls -l`.
    ///
    /// Directories are 0. Files are the UTF-8 length of their lines joined
    /// with `\n`.
    pub fn size(&self) -> u64 {
        match self {
            FsNode::Directory(_) => 0,
            FsNode::File(lines) => {
                let bytes: usize = lines.iter().map(String::len).sum();
                (bytes + lines.len().saturating_sub(1)) as u64
            },
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<String, FsNode>> {
        match self {
            FsNode::Directory(children) => Some(children),
            FsNode::File(_) => None,
        }
    }

    pub fn lines(&self) -> Option<&[String]> {
        match self {
            FsNode::File(lines) => Some(lines),
            FsNode::Directory(_) => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        match self {
            FsNode::File(_) => 1,
            FsNode::Directory(children) => {
                1 + children.values().map(FsNode::count).sum::<usize>()
            },
        }
    }
}

/// A single directory entry returned by [`crate::VirtualFs::readdir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
}

/// Locale-style name ordering used for listings.
///
/// Compares case-insensitively first; on a tie the lowercase spelling sorts
/// first (`apple`, `Apple`, `banana`).
pub fn name_order(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}
