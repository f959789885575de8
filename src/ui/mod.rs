//! Terminal presentation: theme, capability detection, menu and messages.

pub mod console;
pub mod context;
pub mod menu;
pub mod messages;
pub mod output;
pub mod terminal;
pub mod theme;

pub use console::{format_value, result_line, Console};
pub use context::UiContext;
