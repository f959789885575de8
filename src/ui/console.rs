//! Line-oriented writer for everything the session shows the user.

use std::io::{self, Write};

use crate::models::Calculation;
use crate::ui::context::UiContext;
use crate::ui::menu::{menu_entries, MENU_HEADING};
use crate::ui::theme::{colors, paint};

/// Format a result the way the result line shows it: shortest round-trip
/// decimal, no trailing `.0`, and never `-0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// `The result of 5 + 3 is: 8`
pub fn result_line(calculation: &Calculation, value: f64) -> String {
    format!("The result of {} is: {}", calculation, format_value(value))
}

pub struct Console<W> {
    out: W,
    ui: UiContext,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, ui: UiContext) -> Self {
        Self { out, ui }
    }

    /// Write `text` without a newline and flush so it shows before input.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let painted = paint(text, colors::ERROR, self.ui.color);
        writeln!(self.out, "{painted}")
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        let painted = paint(text, colors::WARNING, self.ui.color);
        writeln!(self.out, "{painted}")
    }

    /// Operator menu followed by a blank line. No-op when the menu is hidden.
    pub fn menu(&mut self) -> io::Result<()> {
        if !self.ui.show_menu {
            return Ok(());
        }
        let heading = paint(MENU_HEADING, colors::INFO, self.ui.color);
        writeln!(self.out, "{heading}")?;
        for entry in menu_entries() {
            writeln!(self.out, "{entry}")?;
        }
        writeln!(self.out)
    }

    /// Blank line, then the result line.
    pub fn result(&mut self, calculation: &Calculation, value: f64) -> io::Result<()> {
        let line = result_line(calculation, value);
        let painted = paint(&line, colors::SUCCESS, self.ui.color);
        writeln!(self.out)?;
        writeln!(self.out, "{painted}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
