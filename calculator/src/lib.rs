//! Calculator - add two floating-point numbers.
//!
//! The crate exposes the pure arithmetic used by the `add_numbers` binary:
//! - [`add_numbers`]: native IEEE-754 addition
//! - [`Sum`]: an operand pair with its result, rendered as a sentence
//! - [`parse_number`]: turns a command-line token into an `f64`

pub mod arith;
pub mod error;

pub use crate::arith::{Sum, add_numbers, parse_number};
pub use crate::error::{CalcError, Result};
