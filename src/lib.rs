//! calc-console - interactive console calculator
//!
//! Reads two integers and an operator, prints the result, and asks whether
//! to go again. Operators are accepted as a symbol, an English word, or a
//! menu number.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod operator;
pub mod session;
pub mod ui;

// Re-exports for convenience
pub use config::{ColorMode, Config};
pub use engine::evaluate;
pub use error::{CalcError, CalcResult};
pub use input::{parse_integer, Prompter};
pub use models::{Calculation, Operator, Outcome};
pub use operator::{is_operator_match, is_valid_operator, resolve};
pub use session::{Session, SessionOptions, SessionState, SessionSummary};
