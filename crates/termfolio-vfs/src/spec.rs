//! Static tree specification.
//!
//! A [`DirSpec`] describes a directory by its subdirectories and files. It
//! can be built in code with the chaining helpers or deserialized from TOML:
//!
//! ```toml
//! [[dirs]]
//! name = "etc"
//!
//!   [[dirs.files]]
//!   name = "motd"
//!   content = "hello"
//! ```

use serde::{Deserialize, Serialize};

/// A directory in a tree specification.
///
/// The root's `name` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirSpec {
    pub name: String,
    pub dirs: Vec<DirSpec>,
    pub files: Vec<FileSpec>,
}

/// A file with literal text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl DirSpec {
    /// An unnamed root directory.
    pub fn root() -> Self {
        Self::default()
    }

    /// A named, empty directory.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a subdirectory.
    pub fn dir(mut self, dir: DirSpec) -> Self {
        self.dirs.push(dir);
        self
    }

    /// Add a file.
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push(FileSpec {
            name: name.into(),
            content: content.into(),
        });
        self
    }
}
