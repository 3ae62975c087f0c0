//! Error types for the calculator.

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// The error type for parsing operands and reporting a sum.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CalcError {
    /// A token could not be read as a floating-point number.
    #[error("invalid float value: '{token}'")]
    InvalidNumber {
        /// The offending token, as given.
        token: String,
    },

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create an invalid number error for `token`.
    #[must_use]
    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = CalcError::invalid_number("foo");
        assert_eq!(err.to_string(), "invalid float value: 'foo'");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CalcError = io.into();
        assert!(matches!(err, CalcError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
