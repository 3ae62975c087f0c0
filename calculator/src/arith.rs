//! Floating-point addition and the sentence that reports it.

use std::fmt;

use tracing::debug;

use crate::error::{CalcError, Result};

/// Add two numbers.
///
/// Follows native IEEE-754 semantics: infinities and NaN propagate, and the
/// operation never fails.
#[inline]
#[must_use]
pub const fn add_numbers(a: f64, b: f64) -> f64 {
    a + b
}

/// Parse a command-line token as a floating-point number.
///
/// Surrounding whitespace is ignored. Accepts an optional sign, a fractional
/// part and an exponent, as well as `inf`, `infinity` and `nan`.
///
/// # Errors
///
/// Returns [`CalcError::InvalidNumber`] if the token is empty or not numeric.
pub fn parse_number(token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_number(token))
}

/// Two operands and their sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sum {
    /// First operand.
    pub num1: f64,
    /// Second operand.
    pub num2: f64,
    /// `num1 + num2`.
    pub result: f64,
}

impl Sum {
    /// Compute the sum of `num1` and `num2`.
    #[must_use]
    pub fn of(num1: f64, num2: f64) -> Self {
        let result = add_numbers(num1, num2);
        debug!(num1, num2, result, "computed sum");
        Self { num1, num2, result }
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("The sum of ")?;
        write_number(f, self.num1)?;
        f.write_str(" and ")?;
        write_number(f, self.num2)?;
        f.write_str(" is ")?;
        write_number(f, self.result)
    }
}

/// Shortest round-trip form, keeping `.0` on integral values.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else {
        write!(f, "{value:?}")
    }
}
