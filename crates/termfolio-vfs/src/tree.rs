//! The immutable in-memory tree.
//!
//! Unlike a writable VFS, there is no `write`/`mkdir`/`remove`: the tree is
//! validated and assembled once by [`VirtualFs::from_spec`] and every later
//! access is a read.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use termfolio_types::error::{Result, TermfolioError};

use crate::node::{FsNode, VfsEntry, name_order};
use crate::spec::DirSpec;

/// Maximum directory nesting accepted from a spec.
pub const MAX_DEPTH: usize = 64;

/// A read-only virtual file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFs {
    root: FsNode,
}

impl VirtualFs {
    /// Build a tree from a spec, failing on malformed input.
    ///
    /// Rejects duplicate names within a directory (a file and a directory may
    /// not share a name either), empty names, names containing `/`, the names
    /// `.` and `..`, and nesting deeper than [`MAX_DEPTH`].
    pub fn from_spec(spec: &DirSpec) -> Result<Self> {
        let root = build_dir(spec, "", 0)?;
        log::debug!("virtual fs built with {} nodes", root.count());
        Ok(Self { root })
    }

    /// Parse a TOML tree spec and build it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let spec: DirSpec = toml::from_str(text)?;
        Self::from_spec(&spec)
    }

    /// Read a TOML tree spec from disk and build it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// A tree holding only an empty root directory.
    pub fn empty() -> Self {
        Self {
            root: FsNode::Directory(BTreeMap::new()),
        }
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Find the node at a normalized absolute path.
    pub fn lookup(&self, path: &str) -> Result<&FsNode> {
        if !path.starts_with('/') {
            return Err(TermfolioError::NotFound(path.to_string()));
        }
        let mut node = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = match node {
                FsNode::Directory(children) => children
                    .get(segment)
                    .ok_or_else(|| TermfolioError::NotFound(path.to_string()))?,
                FsNode::File(_) => return Err(TermfolioError::NotFound(path.to_string())),
            };
        }
        Ok(node)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// List a directory in listing order (see [`name_order`]).
    pub fn readdir(&self, path: &str) -> Result<Vec<VfsEntry>> {
        let children = self
            .lookup(path)?
            .children()
            .ok_or_else(|| TermfolioError::Vfs(format!("not a directory: {path}")))?;
        let mut entries: Vec<VfsEntry> = children
            .iter()
            .map(|(name, node)| VfsEntry {
                name: name.clone(),
                kind: node.kind(),
                size: node.size(),
            })
            .collect();
        entries.sort_by(|a, b| name_order(&a.name, &b.name));
        Ok(entries)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

fn build_dir(spec: &DirSpec, path: &str, depth: usize) -> Result<FsNode> {
    if depth > MAX_DEPTH {
        return Err(TermfolioError::Vfs(format!(
            "tree deeper than {MAX_DEPTH} levels at {path}"
        )));
    }
    let mut children = BTreeMap::new();

    for dir in &spec.dirs {
        let child_path = format!("{path}/{}", dir.name);
        check_name(&dir.name, path)?;
        let node = build_dir(dir, &child_path, depth + 1)?;
        insert_unique(&mut children, &dir.name, node, path)?;
    }
    for file in &spec.files {
        check_name(&file.name, path)?;
        let lines = file.content.lines().map(str::to_string).collect();
        insert_unique(&mut children, &file.name, FsNode::File(lines), path)?;
    }

    Ok(FsNode::Directory(children))
}

fn check_name(name: &str, parent: &str) -> Result<()> {
    let parent = if parent.is_empty() { "/" } else { parent };
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(TermfolioError::Vfs(format!(
            "invalid name {name:?} in {parent}"
        )));
    }
    Ok(())
}

fn insert_unique(
    children: &mut BTreeMap<String, FsNode>,
    name: &str,
    node: FsNode,
    parent: &str,
) -> Result<()> {
    match children.entry(name.to_string()) {
        Entry::Occupied(_) => {
            let parent = if parent.is_empty() { "/" } else { parent };
            Err(TermfolioError::Vfs(format!(
                "duplicate name {name:?} in {parent}"
            )))
        },
        Entry::Vacant(slot) => {
            slot.insert(node);
            Ok(())
        },
    }
}
