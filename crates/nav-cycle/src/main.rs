use anyhow::{Context, Result};
use nav_list_config::{NavConfig, ZOOM_PRESET};
use std::io::{self, BufRead, Write};

mod command;
mod logger;

use command::{execute, Command};

fn main() -> Result<()> {
    let log_file = logger::init();

    let preset = std::env::args().nth(1).unwrap_or_else(|| ZOOM_PRESET.to_string());
    log::info!("Starting nav-cycle with preset '{}'", preset);

    let config = NavConfig::<f64>::load().with_builtin_presets();
    let mut list = config.build(&preset).with_context(|| {
        let names: Vec<&str> = config.names().collect();
        format!("Available presets: {}", names.join(", "))
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                log::warn!("Rejected input {:?}: {}", line, e);
                writeln!(stdout, "error: {}", e)?;
                continue;
            }
        };

        match execute(&mut list, command) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) => {
                log::debug!("{:?} failed: {}", command, e);
                writeln!(stdout, "error: {}", e)?;
            }
        }
    }

    log::info!("Exiting nav-cycle, log written to {}", log_file.display());
    Ok(())
}
