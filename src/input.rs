//! Prompted line input with validation retries.

use std::io::{BufRead, Write};

use crate::error::{CalcError, CalcResult};
use crate::ui::messages::INVALID_INTEGER;
use crate::ui::Console;

/// Parse a base-10 `i32`, allowing surrounding whitespace and a leading sign.
pub fn parse_integer(text: &str) -> CalcResult<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| CalcError::InvalidInteger {
            input: text.to_string(),
        })
}

/// Reads answers from `R`, writing prompts and validation messages to a
/// [`Console`].
pub struct Prompter<R, W> {
    input: R,
    console: Console<W>,
    max_retries: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, console: Console<W>) -> Self {
        Self {
            input,
            console,
            max_retries: None,
        }
    }

    /// Limit invalid entries per prompt. `None` retries forever.
    pub fn with_max_retries(mut self, max_retries: Option<u32>) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn console(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Show `prompt` and return the next line without its terminator.
    ///
    /// Returns [`CalcError::EndOfInput`] once the stream is exhausted.
    /// Bytes that are not valid UTF-8 become U+FFFD.
    pub fn read_line(&mut self, prompt: &str) -> CalcResult<String> {
        self.console.prompt(prompt)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("input stream closed");
            return Err(CalcError::EndOfInput);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt until `parse` accepts a line, printing `invalid` after each
    /// rejection.
    ///
    /// Errors from `read_line` end the loop. With a retry limit set, the
    /// loop gives up with [`CalcError::RetriesExhausted`] once the number of
    /// rejected lines exceeds it.
    pub fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> CalcResult<T>,
    ) -> CalcResult<T> {
        let mut rejected: u32 = 0;
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    rejected += 1;
                    tracing::debug!(%err, rejected, "rejected input");
                    self.console.error(invalid)?;

                    if let Some(max) = self.max_retries {
                        if rejected > max {
                            tracing::warn!(rejected, max, "retry limit reached");
                            return Err(CalcError::RetriesExhausted { attempts: rejected });
                        }
                    }
                }
            }
        }
    }

    /// Prompt until the line parses as an integer.
    pub fn read_integer(&mut self, prompt: &str) -> CalcResult<i32> {
        self.read_until_valid(prompt, INVALID_INTEGER, parse_integer)
    }
}
