//! Tab handling for the line host.
//!
//! Lines starting with `:` drive the tab manager and the history cursor.
//! Everything else runs in the active tab.

use std::io::{self, Write};

use termfolio_terminal::{CommandResult, Effect, HistoryDirection, SessionManager, ShellController};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Tabs<'a> {
    shell: &'a ShellController,
    manager: SessionManager,
}

impl<'a> Tabs<'a> {
    pub fn new(shell: &'a ShellController) -> Self {
        Self {
            shell,
            manager: SessionManager::new(shell.config().home.as_str()),
        }
    }

    /// Print the welcome banner for the active tab.
    pub fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(lines) = self.manager.welcome(self.manager.active_id()) {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    pub fn prompt(&self) -> String {
        format!("[{}] $ ", self.manager.active_id())
    }

    /// Handle one line of input.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Step> {
        let trimmed = line.trim();
        let mut words = trimmed.split_whitespace();
        match words.next() {
            Some(":quit" | ":q") => return Ok(Step::Quit),
            Some(":new") => {
                self.manager.open();
                self.greet(out)?;
            },
            Some(":close") => {
                let id = self.manager.active_id().to_string();
                self.manager.close(&id);
                writeln!(out, "closed {id}")?;
            },
            Some(":tabs") => {
                for id in self.manager.ids() {
                    let mark = if id == self.manager.active_id() { '*' } else { ' ' };
                    writeln!(out, "{mark} {id}")?;
                }
            },
            Some(":switch") => match words.next() {
                Some(id) if self.manager.activate(id) => {},
                Some(id) => writeln!(out, "no such tab: {id}")?,
                None => writeln!(out, "usage: :switch <tab>")?,
            },
            Some(":up") => self.recall(HistoryDirection::Up, out)?,
            Some(":down") => self.recall(HistoryDirection::Down, out)?,
            _ => {
                let Some(session) = self.manager.active_mut() else {
                    return Ok(Step::Continue);
                };
                let result = self.shell.execute(session, line);
                render(&result, out)?;
            },
        }
        Ok(Step::Continue)
    }

    fn recall(&mut self, direction: HistoryDirection, out: &mut impl Write) -> io::Result<()> {
        let Some(session) = self.manager.active_mut() else {
            return Ok(());
        };
        if let Some(entry) = self.shell.navigate_history(session, direction) {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }
}

fn render(result: &CommandResult, out: &mut impl Write) -> io::Result<()> {
    if result.effect == Effect::ClearOutput {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    for line in &result.lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
