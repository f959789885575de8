use crate::config::{ColorMode, Config};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Presentation decisions resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub show_menu: bool,
}

impl UiContext {
    /// Resolve against the real terminal. Expects CLI flags already folded
    /// into `config`.
    pub fn new(config: &Config) -> Self {
        Self::from_caps(config, detect_capabilities())
    }

    pub(crate) fn from_caps(config: &Config, caps: TerminalCapabilities) -> Self {
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            color,
            show_menu: config.output.show_menu,
        }
    }

    /// Plain output with the menu shown; what tests and pipes get.
    pub fn plain() -> Self {
        Self {
            color: false,
            show_menu: true,
        }
    }
}
