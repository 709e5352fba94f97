//! Shell configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock `guest@termfolio` shell rooted at `/home/guest`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermfolioError};

/// Default home directory for every session.
pub const DEFAULT_HOME: &str = "/home/guest";

/// Configuration shared by all sessions of one shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// User name reported by `whoami` and used as the owner in `ls -l`.
    pub user: String,
    /// Host name shown by `neofetch`.
    pub host: String,
    /// Absolute path that `~` expands to. New sessions start here.
    pub home: String,
    /// Optional TOML tree spec replacing the built-in portfolio tree.
    pub vfs_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "termfolio".to_string(),
            home: DEFAULT_HOME.to_string(),
            vfs_path: None,
        }
    }
}

impl ShellConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("{} not found, using default config", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.home.starts_with('/') {
            return Err(TermfolioError::Config(format!(
                "home must be an absolute path: {}",
                self.home
            )));
        }
        if self.user.trim().is_empty() {
            return Err(TermfolioError::Config("user must not be empty".to_string()));
        }
        Ok(())
    }
}
