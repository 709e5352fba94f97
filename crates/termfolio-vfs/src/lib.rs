//! Read-only virtual file system for termfolio.
//!
//! The tree is built once from a [`DirSpec`] and never mutated afterwards, so
//! a single [`VirtualFs`] can be shared by every session without locking.
//! Paths handed to [`VirtualFs::lookup`] must already be normalized; use
//! [`resolve_path`] to turn user input into that form.

mod node;
mod path;
pub mod portfolio;
mod spec;
mod tree;

pub use node::{EntryKind, FsNode, VfsEntry, name_order};
pub use path::{base_name, resolve_path};
pub use spec::{DirSpec, FileSpec};
pub use tree::{MAX_DEPTH, VirtualFs};
