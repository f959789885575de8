//! Common test utilities for calc-console CLI tests.
//!
//! - `TestEnv`: isolated HOME/config dir plus helpers to drive the binary
//! - Assertion macros: `assert_output_contains!`, `assert_output_not_contains!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
