//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    /// A command failure, already formatted as `<command>: <message>`.
    #[error("{0}")]
    Command(String),

    #[error("no such path: {0}")]
    NotFound(String),

    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
