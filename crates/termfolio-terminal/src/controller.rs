//! Shell controller: the single entry point used by the presentation layer.

use termfolio_types::config::ShellConfig;
use termfolio_types::error::{Result, TermfolioError};
use termfolio_types::input::HistoryDirection;
use termfolio_vfs::{VirtualFs, resolve_path};

use crate::clock::{Clock, SystemClock};
use crate::interpreter::{CommandRegistry, CommandResult, Environment, ParsedCommand};
use crate::session::Session;

/// Runs submitted lines against sessions.
///
/// Owns everything sessions share: the command table, the file tree, the
/// config, and the clock. None of it changes after construction, so one
/// controller serves any number of sessions.
pub struct ShellController {
    registry: CommandRegistry,
    vfs: VirtualFs,
    config: ShellConfig,
    clock: Box<dyn Clock>,
}

impl ShellController {
    /// Assemble a controller.
    ///
    /// The configured home is normalized, so `/home/guest/` and
    /// `/home/./guest` both become `/home/guest`. Fails if it is not a
    /// directory in `vfs`, since every new session starts there.
    pub fn new(
        registry: CommandRegistry,
        vfs: VirtualFs,
        mut config: ShellConfig,
    ) -> Result<Self> {
        config.home = resolve_path(Some(&config.home), "/", "/");
        if !vfs.lookup(&config.home).is_ok_and(|n| n.is_dir()) {
            return Err(TermfolioError::Config(format!(
                "home directory {} does not exist in the virtual fs",
                config.home
            )));
        }
        Ok(Self {
            registry,
            vfs,
            config,
            clock: Box::new(SystemClock),
        })
    }

    /// Built-in commands over the tree named by `config.vfs_path`, or the
    /// portfolio tree when unset.
    pub fn from_config(config: ShellConfig) -> Result<Self> {
        let vfs = match &config.vfs_path {
            Some(path) => VirtualFs::load(path)?,
            None => VirtualFs::portfolio()?,
        };
        log::debug!("shell for {}@{} with {} nodes", config.user, config.host, vfs.node_count());
        Self::new(CommandRegistry::with_builtins(), vfs, config)
    }

    /// The stock portfolio shell with default config.
    pub fn portfolio() -> Result<Self> {
        Self::from_config(ShellConfig::default())
    }

    /// Replace the clock used by `date`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn vfs(&self) -> &VirtualFs {
        &self.vfs
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// A fresh session rooted at the configured home.
    pub fn create_session(&self, id: impl Into<String>) -> Session {
        Session::new(id, self.config.home.as_str())
    }

    /// Run one submitted line.
    ///
    /// Blank input returns an empty result and records nothing. Otherwise the
    /// trimmed line is appended to the session history before dispatch.
    pub fn execute(&self, session: &mut Session, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::empty();
        }
        session.record(trimmed);

        let Some(parsed) = ParsedCommand::parse(trimmed) else {
            return CommandResult::empty();
        };
        let mut env = Environment {
            session,
            vfs: &self.vfs,
            config: &self.config,
            clock: self.clock.as_ref(),
        };
        self.registry.dispatch(&parsed, &mut env)
    }

    /// Move the session's history cursor; see [`Session::navigate`].
    pub fn navigate_history(
        &self,
        session: &mut Session,
        direction: HistoryDirection,
    ) -> Option<String> {
        session.navigate(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Effect;
    use termfolio_vfs::DirSpec;

    fn controller() -> ShellController {
        ShellController::portfolio().unwrap()
    }

    #[test]
    fn new_session_at_home() {
        let shell = controller();
        let s = shell.create_session("tab-1");
        assert_eq!(s.cwd(), "/home/guest");
    }

    #[test]
    fn blank_input_records_nothing() {
        let shell = controller();
        let mut s = shell.create_session("t");
        for line in ["", "   ", "\t\n"] {
            assert_eq!(shell.execute(&mut s, line), CommandResult::empty());
        }
        assert!(s.history().is_empty());
    }

    #[test]
    fn submission_recorded_trimmed_before_dispatch() {
        let shell = controller();
        let mut s = shell.create_session("t");
        let out = shell.execute(&mut s, "  history ");
        assert_eq!(s.history(), ["history".to_string()]);
        assert_eq!(out.lines, vec!["1  history"]);
    }

    #[test]
    fn unknown_command_still_recorded() {
        let shell = controller();
        let mut s = shell.create_session("t");
        let out = shell.execute(&mut s, "sudo rm -rf /");
        assert_eq!(out.lines[0], "Command not found: sudo");
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn command_name_case_insensitive() {
        let shell = controller();
        let mut s = shell.create_session("t");
        assert_eq!(shell.execute(&mut s, "PWD").lines, vec!["/home/guest"]);
    }

    #[test]
    fn clear_effect_passes_through() {
        let shell = controller();
        let mut s = shell.create_session("t");
        assert_eq!(shell.execute(&mut s, "clear").effect, Effect::ClearOutput);
    }

    #[test]
    fn navigate_delegates_to_session() {
        let shell = controller();
        let mut s = shell.create_session("t");
        shell.execute(&mut s, "pwd");
        assert_eq!(shell.navigate_history(&mut s, HistoryDirection::Up).as_deref(), Some("pwd"));
    }

    #[test]
    fn missing_home_rejected() {
        let vfs = VirtualFs::from_spec(&DirSpec::root().dir(DirSpec::named("etc"))).unwrap();
        let err =
            ShellController::new(CommandRegistry::with_builtins(), vfs, ShellConfig::default());
        assert!(matches!(err, Err(TermfolioError::Config(_))));
    }

    #[test]
    fn home_must_be_directory() {
        let vfs = VirtualFs::from_spec(&DirSpec::root().file("home", "")).unwrap();
        let config = ShellConfig {
            home: "/home".to_string(),
            ..ShellConfig::default()
        };
        assert!(ShellController::new(CommandRegistry::with_builtins(), vfs, config).is_err());
    }

    #[test]
    fn home_is_normalized() {
        let config = ShellConfig {
            home: "/home/./guest/".to_string(),
            ..ShellConfig::default()
        };
        let vfs = VirtualFs::portfolio().unwrap();
        let shell = ShellController::new(CommandRegistry::with_builtins(), vfs, config).unwrap();
        assert_eq!(shell.config().home, "/home/guest");

        let mut s = shell.create_session("t");
        assert_eq!(shell.execute(&mut s, "pwd").lines, vec!["/home/guest"]);
        shell.execute(&mut s, "cd .");
        assert_eq!(shell.execute(&mut s, "pwd").lines, vec!["/home/guest"]);
        assert_eq!(shell.execute(&mut s, "cd ~/projects").lines, Vec::<String>::new());
        assert_eq!(s.cwd(), "/home/guest/projects");
    }

    #[test]
    fn from_config_rejects_malformed_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.toml");
        let tree = "[[dirs]]\nname = \"srv\"\n\n[[dirs]]\nname = \"srv\"\n";
        std::fs::write(&path, tree).unwrap();
        let config = ShellConfig {
            home: "/srv".to_string(),
            vfs_path: Some(path),
            ..ShellConfig::default()
        };
        let err = ShellController::from_config(config);
        assert!(matches!(err, Err(TermfolioError::Vfs(_))));
    }

    #[test]
    fn from_config_loads_tree_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.toml");
        let tree = r#"
[[dirs]]
name = "srv"

  [[dirs.files]]
  name = "a"
  content = "x"
"#;
        std::fs::write(&path, tree).unwrap();
        let config = ShellConfig {
            home: "/srv".to_string(),
            vfs_path: Some(path),
            ..ShellConfig::default()
        };
        let shell = ShellController::from_config(config).unwrap();
        let mut s = shell.create_session("t");
        assert_eq!(shell.execute(&mut s, "ls").lines, vec!["a"]);
    }
}
