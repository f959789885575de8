use crate::config::ConfigWarning;
use crate::ui::theme::{colors, paint};

/// Render one config warning, e.g. `⚠ Unknown config key 'colr' in config.toml:3`.
pub fn format_config_warning(warning: &ConfigWarning, color: bool) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = paint(
        &format!("⚠ Unknown config key '{}' in {}", warning.key, location),
        colors::WARNING,
        color,
    );
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    text
}

pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool) {
    for w in warnings {
        eprintln!("{}", format_config_warning(w, color));
    }
}
