//! Operator resolution
//!
//! Maps a raw operator token to one of the four operators. Matching is by
//! substring, not equality: a token selects an operator when it contains the
//! operator's symbol, its English word (case-insensitive), or its menu digit.
//!
//! A token can match more than one operator (`"1 minus"` contains both the
//! Add digit and the Subtract word). Operators are tried in
//! [`Operator::CHECK_ORDER`] and the first match wins, so such tokens
//! resolve to the earliest operator in that order.

use std::str::FromStr;

use crate::error::CalcError;
use crate::models::Operator;

/// True if `token` contains `symbol`, its lowercase form contains `word`,
/// or it contains `digit`.
pub fn is_operator_match(token: &str, symbol: &str, word: &str, digit: &str) -> bool {
    token.contains(symbol) || token.to_lowercase().contains(word) || token.contains(digit)
}

fn matches_operator(token: &str, op: Operator) -> bool {
    is_operator_match(token, op.symbol(), op.word(), op.digit())
}

/// True if any of the four operators matches `token`.
pub fn is_valid_operator(token: &str) -> bool {
    resolve(token).is_some()
}

/// Resolve `token` to the first matching operator, or `None` if invalid.
pub fn resolve(token: &str) -> Option<Operator> {
    let resolved = Operator::CHECK_ORDER
        .into_iter()
        .find(|&op| matches_operator(token, op));
    tracing::debug!(token, ?resolved, "resolved operator token");
    resolved
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).ok_or_else(|| CalcError::UnrecognizedOperator {
            token: s.to_string(),
        })
    }
}
