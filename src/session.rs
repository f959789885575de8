//! Interactive calculator session.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! AwaitFirstOperand -> AwaitOperator -> AwaitSecondOperand -> Compute
//!        ^                                                        |
//!        |                                                  ReportResult
//!        |                                                        |
//!        +------------- "y..." --- AwaitRepeatDecision <----------+
//!                                        |
//!                                   otherwise
//!                                        v
//!                                   Terminated
//! ```
//!
//! Division by zero never ends the session; it is reported and the loop
//! moves on to the repeat decision. End of input, or a configured retry
//! limit being hit, moves straight to `Terminated`.

use std::io::{BufRead, Write};

use crate::error::{CalcError, CalcResult};
use crate::input::Prompter;
use crate::models::{Calculation, Operator, Outcome};
use crate::ui::messages::{
    DIVISION_BY_ZERO, FAREWELL, FIRST_NUMBER_PROMPT, INCORRECT_INPUT, INVALID_OPERATOR,
    OPERATOR_PROMPT, REPEAT_PROMPT, SECOND_NUMBER_PROMPT, TOO_MANY_ATTEMPTS, WELCOME,
};
use crate::ui::Console;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    AwaitFirstOperand,
    AwaitOperator { first: i32 },
    AwaitSecondOperand { first: i32, operator: Operator },
    Compute(Calculation),
    ReportResult(Outcome),
    AwaitRepeatDecision,
    Terminated,
}

/// Session-level settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Invalid entries tolerated per prompt; `None` retries forever.
    pub max_retries: Option<u32>,
}

/// Counts reported when the session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub calculations: u32,
    pub failures: u32,
}

/// True when the repeat answer asks for another calculation.
pub fn wants_repeat(answer: &str) -> bool {
    answer.to_lowercase().starts_with('y')
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, console: Console<W>, options: SessionOptions) -> Self {
        Self {
            prompter: Prompter::new(input, console).with_max_retries(options.max_retries),
            summary: SessionSummary::default(),
        }
    }

    /// Run from the welcome message to termination.
    ///
    /// Only I/O failures on the output stream are returned as errors.
    pub fn run(&mut self) -> CalcResult<SessionSummary> {
        let console = self.prompter.console();
        console.line(WELCOME)?;
        console.blank()?;

        let mut state = SessionState::AwaitFirstOperand;
        while state != SessionState::Terminated {
            tracing::trace!(?state, "session step");
            state = match self.step(state) {
                Ok(next) => next,
                Err(err) => self.recover(err)?,
            };
        }

        let console = self.prompter.console();
        console.line(FAREWELL)?;
        console.flush()?;

        tracing::info!(
            calculations = self.summary.calculations,
            failures = self.summary.failures,
            "session finished"
        );
        Ok(self.summary)
    }

    /// Advance one state.
    pub fn step(&mut self, state: SessionState) -> CalcResult<SessionState> {
        let next = match state {
            SessionState::AwaitFirstOperand => {
                let first = self.prompter.read_integer(FIRST_NUMBER_PROMPT)?;
                SessionState::AwaitOperator { first }
            }
            SessionState::AwaitOperator { first } => {
                self.prompter.console().menu()?;
                let operator = self.prompter.read_until_valid(
                    OPERATOR_PROMPT,
                    INVALID_OPERATOR,
                    |token| token.parse::<Operator>(),
                )?;
                SessionState::AwaitSecondOperand { first, operator }
            }
            SessionState::AwaitSecondOperand { first, operator } => {
                let second = self.prompter.read_integer(SECOND_NUMBER_PROMPT)?;
                SessionState::Compute(Calculation::new(first, operator, second))
            }
            SessionState::Compute(calculation) => {
                let outcome = match calculation.evaluate() {
                    Ok(value) => Outcome::Computed { calculation, value },
                    Err(CalcError::DivisionByZero) => {
                        self.prompter.console().error(DIVISION_BY_ZERO)?;
                        Outcome::Failed { calculation }
                    }
                    Err(err) => return Err(err),
                };
                SessionState::ReportResult(outcome)
            }
            SessionState::ReportResult(outcome) => {
                self.report(outcome)?;
                SessionState::AwaitRepeatDecision
            }
            SessionState::AwaitRepeatDecision => {
                let answer = self.prompter.read_line(REPEAT_PROMPT)?;
                if wants_repeat(&answer) {
                    SessionState::AwaitFirstOperand
                } else {
                    SessionState::Terminated
                }
            }
            SessionState::Terminated => SessionState::Terminated,
        };
        Ok(next)
    }

    fn report(&mut self, outcome: Outcome) -> CalcResult<()> {
        let console = self.prompter.console();
        match outcome {
            Outcome::Computed { calculation, value } => {
                self.summary.calculations += 1;
                tracing::debug!(%calculation, value, "calculation complete");
                console.result(&calculation, value)?;
            }
            Outcome::Failed { calculation } => {
                self.summary.failures += 1;
                tracing::debug!(%calculation, "calculation failed");
                console.error(INCORRECT_INPUT)?;
            }
        }
        Ok(())
    }

    /// Map an error from `step` to the next state, or give up on I/O errors.
    fn recover(&mut self, err: CalcError) -> CalcResult<SessionState> {
        match err {
            CalcError::EndOfInput => {
                // Keep the farewell off the same line as a pending prompt.
                self.prompter.console().blank()?;
                Ok(SessionState::Terminated)
            }
            CalcError::RetriesExhausted { .. } => {
                self.prompter.console().warning(TOO_MANY_ATTEMPTS)?;
                Ok(SessionState::Terminated)
            }
            other => Err(other),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn into_console(self) -> Console<W> {
        self.prompter.into_console()
    }
}
