//! Calculation engine
//!
//! Add, subtract and multiply are exact in `i64` before widening to `f64`.
//! Division promotes both operands to `f64` so fractional results survive.

use crate::error::{CalcError, CalcResult};
use crate::models::{Calculation, Operator};

/// Apply `op` to the two operands.
///
/// Returns [`CalcError::DivisionByZero`] for `Divide` with a zero divisor;
/// nothing is computed in that case.
pub fn evaluate(first: i32, op: Operator, second: i32) -> CalcResult<f64> {
    let (a, b) = (i64::from(first), i64::from(second));
    let value = match op {
        Operator::Add => (a + b) as f64,
        Operator::Subtract => (a - b) as f64,
        Operator::Multiply => (a * b) as f64,
        Operator::Divide => {
            if second == 0 {
                tracing::debug!(first, "rejected division by zero");
                return Err(CalcError::DivisionByZero);
            }
            f64::from(first) / f64::from(second)
        }
    };
    Ok(value)
}

impl Calculation {
    /// Evaluate this calculation. See [`evaluate`].
    pub fn evaluate(&self) -> CalcResult<f64> {
        evaluate(self.first, self.operator, self.second)
    }
}
