//! termfolio terminal host.
//!
//! Reads lines from stdin and runs them in the active tab. Lines starting
//! with `:` manage tabs (`:new`, `:close`, `:tabs`, `:switch <tab>`), walk
//! history (`:up`, `:down`), or exit (`:quit`).

mod tabs;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use tabs::{Step, Tabs};
use termfolio_terminal::ShellController;
use termfolio_types::config::ShellConfig;

const CONFIG_FILE: &str = "termfolio.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::load_or_default(Path::new(CONFIG_FILE))?;
    log::info!("Starting termfolio as {}@{}", config.user, config.host);

    let shell = ShellController::from_config(config)?;
    log::info!("Loaded {} commands", shell.registry().list_commands().len());

    let mut tabs = Tabs::new(&shell);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    tabs.greet(&mut stdout)?;

    let mut line = String::new();
    loop {
        write!(stdout, "{}", tabs.prompt())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }
        if tabs.handle(&line, &mut stdout)? == Step::Quit {
            break;
        }
    }

    log::info!("Shutting down");
    Ok(())
}
