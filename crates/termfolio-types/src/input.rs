//! Platform-agnostic input directions.
//!
//! Hosts map their native keys (arrow keys, d-pad) to these before calling
//! into the shell.

use serde::{Deserialize, Serialize};

/// Direction for history recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryDirection {
    /// Toward older entries.
    Up,
    /// Toward newer entries, then an empty line.
    Down,
}
