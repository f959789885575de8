//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CalcError, CalcResult};

use super::types::{ColorMode, Config};

/// Directory name under the user config dir
const APP_DIR: &str = "calc-console";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CalcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> CalcResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CalcError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration: an explicit path (must exist), else the user
/// config file if present, else defaults. Env overrides apply in every case.
pub fn load(explicit: Option<&Path>) -> CalcResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|p| p.exists()),
    };

    let Some(path) = candidate else {
        tracing::debug!("no config file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            ..LoadedConfig::default()
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

/// `<config dir>/calc-console/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Apply environment variable overrides (CALC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CALC_MAX_RETRIES (unparseable values clear the limit)
    if let Some(val) = get_env("CALC_MAX_RETRIES") {
        config.input.max_retries = val.trim().parse::<u32>().ok();
    }

    // CALC_COLOR
    if let Some(val) = get_env("CALC_COLOR") {
        config.output.color = ColorMode::from_name(&val);
    }

    // CALC_SHOW_MENU
    if let Some(val) = get_env("CALC_SHOW_MENU") {
        config.output.show_menu = !matches!(
            val.trim().to_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        );
    }

    // CALC_LOG
    if let Some(val) = get_env("CALC_LOG") {
        if !val.trim().is_empty() {
            config.logging.default = val.trim().to_string();
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "input",
        "max_retries",
        "output",
        "color",
        "show_menu",
        "logging",
        "default",
        "modules",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(crate) fn parse_str(content: &str) -> CalcResult<(Config, Vec<ConfigWarning>)> {
    parse_with_warnings(content, Path::new("config.toml"))
}
