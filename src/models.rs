//! Core data models for calc-console
//!
//! - `Operator`: the four supported binary operations
//! - `Calculation`: two operands and a resolved operator
//! - `Outcome`: what one pass through the session loop produced

use std::fmt;

/// Supported binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    /// Resolution order. The first operator whose patterns match a token wins.
    pub const CHECK_ORDER: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Divide,
        Operator::Multiply,
    ];

    /// Symbol shown in the result line (`+`, `-`, `/`, `*`)
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Divide => "/",
            Operator::Multiply => "*",
        }
    }

    /// English word accepted as a synonym (matched case-insensitively)
    pub fn word(self) -> &'static str {
        match self {
            Operator::Add => "plus",
            Operator::Subtract => "minus",
            Operator::Divide => "divide",
            Operator::Multiply => "multiply",
        }
    }

    /// Menu number accepted as a synonym
    pub fn digit(self) -> &'static str {
        match self {
            Operator::Add => "1",
            Operator::Subtract => "2",
            Operator::Divide => "3",
            Operator::Multiply => "4",
        }
    }

    /// Label used in the operator menu
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "Plus",
            Operator::Subtract => "Minus",
            Operator::Divide => "Divide",
            Operator::Multiply => "Multiply",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One binary operation awaiting evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub first: i32,
    pub operator: Operator,
    pub second: i32,
}

impl Calculation {
    pub fn new(first: i32, operator: Operator, second: i32) -> Self {
        Self {
            first,
            operator,
            second,
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.operator, self.second)
    }
}

/// Result of a single loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Calculation succeeded
    Computed {
        calculation: Calculation,
        value: f64,
    },
    /// Calculation was attempted and rejected (division by zero)
    Failed { calculation: Calculation },
}
