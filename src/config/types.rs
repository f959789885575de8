//! Configuration type definitions

use std::collections::BTreeMap;

use serde::Deserialize;

/// Input handling configuration
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct InputConfig {
    /// Invalid entries tolerated per prompt before the session gives up.
    /// Unset means retry forever.
    #[serde(default)]
    pub max_retries: Option<u32>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub show_menu: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            show_menu: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a mode name; unknown names fall back to `Auto`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }
}

/// Logging configuration
///
/// ```toml
/// [logging]
/// default = "warn"
///
/// [logging.modules]
/// calc_console = "debug"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub default: String,

    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive string, e.g. `warn,calc_console::session=debug`.
    pub fn directives(&self) -> String {
        let mut filter = self.default.clone();
        for (module, level) in &self.modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
