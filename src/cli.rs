//! CLI Argument Parsing
//!
//! The calculator has no subcommands; flags only adjust presentation,
//! retry behavior and logging. Flags override config and environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ColorMode, Config};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// calc-console - interactive two-number calculator
#[derive(Parser, Debug)]
#[command(name = "calc-console")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Operators may be given as a symbol (+ - / *), a word \
(plus, minus, divide, multiply) or a menu number (1-4).")]
pub struct Cli {
    /// Path to a config file (default: <config dir>/calc-console/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Do not print the operator menu before each operator prompt
    #[arg(long)]
    pub no_menu: bool,

    /// Give up after this many invalid entries at one prompt
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Verbosity level (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Fold flag overrides into a loaded config.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(max) = self.max_retries {
            config.input.max_retries = Some(max);
        }
        if let Some(color) = self.color {
            config.output.color = color.into();
        }
        if self.no_menu {
            config.output.show_menu = false;
        }
        config
    }
}
