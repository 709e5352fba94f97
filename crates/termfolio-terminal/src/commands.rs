//! Built-in commands for the termfolio shell: registration and the
//! file-system commands (ls, cd, pwd, cat).

use termfolio_types::error::{Result, TermfolioError};
use termfolio_vfs::{EntryKind, FsNode, base_name};

use crate::interpreter::{Command, CommandRegistry, CommandResult, Environment};

/// Register all built-in commands into a registry.
///
/// `help` is not registered here; the registry answers it directly.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CatCmd));
    crate::system_commands::register_system_commands(reg);
    crate::info_commands::register_info_commands(reg);
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls [path] [-l|-la]"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let mut detailed = false;
        let mut target = None;
        for &arg in args {
            if arg.len() > 1 && arg.starts_with('-') {
                detailed |= arg.contains('l');
            } else if target.is_none() {
                target = Some(arg);
            }
        }

        // No operand lists the cwd.
        let path = match target {
            Some(raw) => env.resolve(Some(raw)),
            None => env.resolve(Some(env.session.cwd())),
        };
        let Ok(node) = env.vfs.lookup(&path) else {
            return Err(TermfolioError::Command(format!(
                "ls: cannot access '{}': No such file or directory",
                target.unwrap_or(&path)
            )));
        };
        if let FsNode::File(_) = node {
            return Ok(CommandResult::text(base_name(&path)));
        }

        let entries = env.vfs.readdir(&path)?;
        if entries.is_empty() {
            return Ok(CommandResult::empty());
        }
        if !detailed {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            return Ok(CommandResult::text(names.join("  ")));
        }

        let lines = entries.iter().map(|e| {
            let mode = match e.kind {
                EntryKind::Directory => "drwxr-xr-x",
                EntryKind::File => "-rw-r--r--",
            };
            format!("{mode} 1 {} staff {:>4} {}", env.config.user, e.size, e.name)
        });
        Ok(CommandResult::lines(lines))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change working directory"
    }
    fn usage(&self) -> &str {
        "cd [path]"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let arg = args.first().copied();
        let target = env.resolve(arg);
        let shown = arg.unwrap_or(&target);
        match env.vfs.lookup(&target) {
            Err(_) => Err(TermfolioError::Command(format!(
                "cd: no such file or directory: {shown}"
            ))),
            Ok(FsNode::File(_)) => Err(TermfolioError::Command(format!(
                "cd: not a directory: {shown}"
            ))),
            Ok(FsNode::Directory(_)) => {
                env.session.set_cwd(target);
                Ok(CommandResult::empty())
            },
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::text(env.session.cwd()))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat <file>..."
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if args.is_empty() {
            return Err(TermfolioError::Command(
                "cat: missing file operand".to_string(),
            ));
        }
        // Each operand contributes its lines or one error line, in order.
        let mut out = Vec::new();
        for &arg in args {
            let path = env.resolve(Some(arg));
            match env.vfs.lookup(&path) {
                Err(_) => out.push(format!("cat: {arg}: No such file or directory")),
                Ok(FsNode::Directory(_)) => out.push(format!("cat: {arg}: Is a directory")),
                Ok(FsNode::File(lines)) => out.extend(lines.iter().cloned()),
            }
        }
        Ok(CommandResult::lines(out))
    }
}
