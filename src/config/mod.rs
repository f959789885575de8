//! Configuration module for calc-console
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CALC_*)
//! 3. Config file (`--config <path>` or `<config dir>/calc-console/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, InputConfig, LoggingConfig, OutputConfig};
