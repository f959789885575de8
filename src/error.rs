//! Error types for calc-console
//!
//! Uses `thiserror` for library errors. Every variant is recoverable at the
//! session level; only `Io` and `Config` escape to the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Main error type for calculator operations
#[derive(Error, Debug)]
pub enum CalcError {
    /// Input that does not parse as a 32-bit base-10 integer
    #[error("'{input}' is not a valid integer")]
    InvalidInteger { input: String },

    /// Operator token that matches none of the four operators
    #[error("unrecognized operator '{token}'")]
    UnrecognizedOperator { token: String },

    /// Divisor was zero; no result is produced
    #[error("division by zero")]
    DivisionByZero,

    /// Input stream closed while waiting for a line
    #[error("end of input")]
    EndOfInput,

    /// Configured retry limit was reached without valid input
    #[error("no valid input after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}
