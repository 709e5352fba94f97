//! Command trait, registry, and dispatch logic.

use std::collections::HashMap;

use termfolio_types::config::ShellConfig;
use termfolio_types::error::Result;
use termfolio_vfs::{VirtualFs, resolve_path};

use crate::clock::Clock;
use crate::session::Session;
use crate::tokenizer::tokenize;

/// Side effect requested by a command, applied by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    /// Wipe the visible output buffer.
    ClearOutput,
}

/// Output produced by one submitted line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Lines to render, in order. May be empty.
    pub lines: Vec<String>,
    pub effect: Effect,
}

impl CommandResult {
    /// No output, no effect.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single line.
    pub fn text(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            effect: Effect::None,
        }
    }

    /// Several lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            effect: Effect::None,
        }
    }

    /// A multi-line text block, split on newlines.
    pub fn block(text: &str) -> Self {
        Self::lines(text.lines())
    }

    /// The clear-screen signal.
    pub fn clear() -> Self {
        Self {
            lines: Vec::new(),
            effect: Effect::ClearOutput,
        }
    }
}

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased command name used for lookup.
    pub name: String,
    /// The command name exactly as typed.
    pub typed: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Tokenize a line. Returns `None` when it holds no tokens.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = tokenize(line).into_iter();
        let typed = tokens.next()?;
        Some(Self {
            name: typed.to_lowercase(),
            typed,
            args: tokens.collect(),
        })
    }
}

/// Capabilities passed to every command.
pub struct Environment<'a> {
    /// The calling tab's state (cwd, history).
    pub session: &'a mut Session,
    /// The shared read-only file tree.
    pub vfs: &'a VirtualFs,
    pub config: &'a ShellConfig,
    pub clock: &'a dyn Clock,
}

impl Environment<'_> {
    /// Resolve a user-supplied path against the session's cwd and home.
    pub fn resolve(&self, raw: Option<&str>) -> String {
        resolve_path(raw, self.session.cwd(), &self.config.home)
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[path\] \[-l\]").
    fn usage(&self) -> &str;

    /// Command category for grouping.
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the command.
    ///
    /// An `Err` must carry a message already in `<command>: <message>` form;
    /// the registry renders it as a single output line.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult>;
}

const HELP_DESCRIPTION: &str = "List available commands";

/// Registry of available commands with dispatch.
///
/// Built once at startup and never mutated after it is handed to the
/// controller.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// A registry holding every built-in command.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// Run a parsed command. Never fails: errors and unknown names become
    /// output lines.
    pub fn dispatch(&self, cmd: &ParsedCommand, env: &mut Environment<'_>) -> CommandResult {
        // `help` needs the registry itself.
        if cmd.name == "help" {
            return match cmd.args.first() {
                Some(name) => self.help_for(name),
                None => self.help(),
            };
        }

        let Some(handler) = self.commands.get(cmd.name.as_str()) else {
            log::debug!("unknown command: {}", cmd.typed);
            return CommandResult::lines([
                format!("Command not found: {}", cmd.typed),
                "Type 'help' to see the list of available commands.".to_string(),
            ]);
        };

        let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();
        log::debug!("dispatch {} ({} args)", cmd.name, args.len());
        handler.execute(&args, env).unwrap_or_else(|e| {
            log::debug!("{} failed: {e}", cmd.name);
            CommandResult::text(e.to_string())
        })
    }

    fn help(&self) -> CommandResult {
        let mut lines = vec!["Available commands:".to_string()];
        for (name, desc) in self.list_commands() {
            lines.push(format!("  {name:<10} - {desc}"));
        }
        CommandResult::lines(lines)
    }

    /// Detail for one command: category, description, usage.
    fn help_for(&self, name: &str) -> CommandResult {
        let lower = name.to_ascii_lowercase();
        if lower == "help" {
            return CommandResult::lines([
                "help (general)".to_string(),
                format!("  {HELP_DESCRIPTION}"),
                "  Usage: help [command]".to_string(),
            ]);
        }
        match self.commands.get(lower.as_str()) {
            Some(cmd) => CommandResult::lines([
                format!("{} ({})", cmd.name(), cmd.category()),
                format!("  {}", cmd.description()),
                format!("  Usage: {}", cmd.usage()),
            ]),
            None => CommandResult::text(format!("help: unknown command: {name}")),
        }
    }

    /// Sorted (name, description) pairs, including `help`.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.push(("help", HELP_DESCRIPTION));
        cmds.sort_by_key(|(name, _)| *name);
        cmds.dedup_by_key(|(name, _)| *name);
        cmds
    }

}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
