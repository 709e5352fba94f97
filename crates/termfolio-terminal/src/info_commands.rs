//! Portfolio text commands: about, contact, resume, projects.

use termfolio_types::error::Result;
use termfolio_vfs::portfolio::{ABOUT, CONTACT, PROJECTS, RESUME};

use crate::interpreter::{Command, CommandResult, Environment};

/// A command that prints a fixed block of text.
struct TextCmd {
    name: &'static str,
    description: &'static str,
    text: &'static str,
}

impl Command for TextCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::block(self.text))
    }
}

const PAGES: [TextCmd; 4] = [
    TextCmd {
        name: "about",
        description: "Learn more about me",
        text: ABOUT,
    },
    TextCmd {
        name: "contact",
        description: "Ways to reach out",
        text: CONTACT,
    },
    TextCmd {
        name: "resume",
        description: "Resume",
        text: RESUME,
    },
    TextCmd {
        name: "projects",
        description: "Project highlights",
        text: PROJECTS,
    },
];

/// Register the portfolio text commands.
pub fn register_info_commands(reg: &mut crate::CommandRegistry) {
    for page in PAGES {
        reg.register(Box::new(page));
    }
}
