//! User-facing text.

pub const WELCOME: &str = "Welcome! I help you calculate numbers.";
pub const FAREWELL: &str = "Thank you for using this calculator.";

pub const FIRST_NUMBER_PROMPT: &str = "Enter first number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter second number: ";
pub const OPERATOR_PROMPT: &str = "Enter the operator: ";
pub const REPEAT_PROMPT: &str = "Calculate again? (yes/no): ";

pub const INVALID_INTEGER: &str = "Invalid input. Please enter a valid integer.";
pub const INVALID_OPERATOR: &str = "Invalid operator. Please enter a valid operator.";
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero!";
pub const INCORRECT_INPUT: &str = "Incorrect Operator or Input.";
pub const TOO_MANY_ATTEMPTS: &str = "Too many invalid attempts.";
