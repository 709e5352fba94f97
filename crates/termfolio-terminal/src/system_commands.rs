//! System and session commands: echo, whoami, date, history, clear, neofetch.

use termfolio_types::error::Result;

use crate::clock::format_timestamp;
use crate::interpreter::{Command, CommandResult, Environment};

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::text(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print current user name"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::text(env.config.user.as_str()))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Print current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::text(format_timestamp(&env.clock.now())))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let lines = env
            .session
            .history()
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}  {entry}", i + 1));
        Ok(CommandResult::lines(lines))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::clear())
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

const LOGO: [&str; 6] = [
    r" _                      ",
    r"| |_ ___ _ __ _ __ ___  ",
    r"| __/ _ \ '__| '_ ` _ \ ",
    r"| ||  __/ |  | | | | | |",
    r" \__\___|_|  |_| |_| |_|",
    r"          folio         ",
];

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "Show system information"
    }
    fn usage(&self) -> &str {
        "neofetch"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let title = format!("{}@{}", env.config.user, env.config.host);
        let info = [
            title.clone(),
            "-".repeat(title.chars().count()),
            format!("OS: termfolio {}", env!("CARGO_PKG_VERSION")),
            "Shell: termfolio-sh".to_string(),
            "Filesystem: virtual, read-only".to_string(),
            format!("Home: {}", env.config.home),
            "Terminal: browser tab".to_string(),
        ];

        let width = LOGO[0].len();
        let rows = LOGO.len().max(info.len());
        let lines = (0..rows).map(|i| {
            let art = LOGO.get(i).copied().unwrap_or("");
            match info.get(i) {
                Some(text) => format!("{art:<width$}   {text}"),
                None => art.to_string(),
            }
        });
        Ok(CommandResult::lines(lines.map(|l| l.trim_end().to_string())))
    }
}

/// Register system commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(NeofetchCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::interpreter::{CommandRegistry, Effect, ParsedCommand};
    use crate::session::Session;
    use chrono::DateTime;
    use termfolio_types::config::ShellConfig;
    use termfolio_vfs::VirtualFs;

    fn exec(session: &mut Session, line: &str) -> CommandResult {
        let mut reg = CommandRegistry::new();
        register_system_commands(&mut reg);
        let vfs = VirtualFs::empty();
        let config = ShellConfig::default();
        let clock = FixedClock(DateTime::parse_from_rfc3339("2026-10-16T09:05:00+02:00").unwrap());
        let mut env = Environment {
            session,
            vfs: &vfs,
            config: &config,
            clock: &clock,
        };
        reg.dispatch(&ParsedCommand::parse(line).unwrap(), &mut env)
    }

    fn session() -> Session {
        Session::new("t", "/home/guest")
    }

    #[test]
    fn echo_joins_with_single_spaces() {
        assert_eq!(exec(&mut session(), "echo   hello    world").lines, vec!["hello world"]);
    }

    #[test]
    fn echo_quoted_keeps_inner_spacing() {
        assert_eq!(exec(&mut session(), r#"echo "a  b" c"#).lines, vec!["a  b c"]);
    }

    #[test]
    fn echo_no_args_is_blank_line() {
        assert_eq!(exec(&mut session(), "echo").lines, vec![""]);
    }

    #[test]
    fn whoami_returns_guest() {
        assert_eq!(exec(&mut session(), "whoami").lines, vec!["guest"]);
    }

    #[test]
    fn date_uses_clock() {
        assert_eq!(
            exec(&mut session(), "date").lines,
            vec!["Fri Oct 16 2026 09:05:00 GMT+0200"]
        );
    }

    #[test]
    fn history_numbered_from_one() {
        let mut s = session();
        s.record("pwd");
        s.record("ls -la");
        s.record("history");
        assert_eq!(
            exec(&mut s, "history").lines,
            vec!["1  pwd", "2  ls -la", "3  history"]
        );
    }

    #[test]
    fn history_empty_session() {
        assert!(exec(&mut session(), "history").lines.is_empty());
    }

    #[test]
    fn clear_signals_without_lines() {
        let out = exec(&mut session(), "clear");
        assert!(out.lines.is_empty());
        assert_eq!(out.effect, Effect::ClearOutput);
    }

    #[test]
    fn neofetch_banner() {
        let out = exec(&mut session(), "neofetch");
        assert_eq!(out.lines.len(), 7);
        assert!(out.lines[0].ends_with("guest@termfolio"));
        assert!(out.lines[1].ends_with("---------------"));
        assert!(out.lines.iter().any(|l| l.contains("Filesystem: virtual, read-only")));
        assert!(out.lines.iter().all(|l| l == l.trim_end()));
    }
}
