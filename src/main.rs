//! calc-console - interactive console calculator
//!
//! Usage: calc-console [OPTIONS]
//!
//! Reads a number, an operator and a second number from stdin, prints the
//! result, and asks whether to calculate again.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use calc_console::cli::Cli;
use calc_console::config;
use calc_console::logging;
use calc_console::ui::messages::FAREWELL;
use calc_console::ui::output::print_config_warnings;
use calc_console::ui::{Console, UiContext};
use calc_console::{Session, SessionOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let config = cli.apply_overrides(loaded.config);

    logging::init_with_config(&config.logging, cli.verbose);
    if let Some(path) = &loaded.source {
        tracing::info!(path = %path.display(), "using config file");
    }

    let ui = UiContext::new(&config);
    print_config_warnings(&loaded.warnings, ui.color);

    install_interrupt_handler()?;

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        Console::new(io::stdout(), ui),
        SessionOptions {
            max_retries: config.input.max_retries,
        },
    );
    session.run().context("calculator session failed")?;

    Ok(())
}

/// Ctrl+C ends the session the same way declining to repeat does.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        tracing::debug!("interrupted");
        let mut stdout = io::stdout();
        let _ = writeln!(stdout);
        let _ = writeln!(stdout, "{FAREWELL}");
        let _ = stdout.flush();
        std::process::exit(0);
    })
    .context("failed to install Ctrl+C handler")
}
