//! Shell core for termfolio.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name once, at startup. The
//! `ShellController` trims and records a submitted line, tokenizes it,
//! resolves the command name, and dispatches `execute()` against the
//! caller's `Session`. Every failure comes back as output text.

mod clock;
mod commands;
mod controller;
mod info_commands;
mod interpreter;
mod manager;
mod session;
mod system_commands;
mod tokenizer;

/// Source of the current time for `date`.
pub use clock::{Clock, FixedClock, SystemClock};
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Entry point used by the presentation layer.
pub use controller::ShellController;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Output produced by one submitted line.
pub use interpreter::{CommandResult, Effect};
/// Capabilities passed to every command.
pub use interpreter::Environment;
/// A tokenized command line.
pub use interpreter::ParsedCommand;
/// Ordered set of open sessions (tabs).
pub use manager::SessionManager;
/// Per-tab shell state.
pub use session::Session;
/// Shell-style tokenizer.
pub use tokenizer::tokenize;

pub use termfolio_types::input::HistoryDirection;
