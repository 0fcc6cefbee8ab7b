//! Error types for UUID generation, parsing, and configuration.

use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur when generating, parsing, or configuring UUIDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    /// The secure random source could not supply randomness.
    #[error("secure random source failed: {message}")]
    RandomSource { message: String },

    /// The input is not a canonical version 4, variant 1 UUID.
    #[error("invalid UUID v4 input: '{input}'")]
    InvalidFormat { input: String },

    /// A configuration value could not be understood.
    #[error("invalid config value for {key}: '{value}'")]
    InvalidConfig { key: &'static str, value: String },
}

impl UuidError {
    pub(crate) fn random_source(err: impl Display) -> Self {
        UuidError::RandomSource {
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        UuidError::InvalidFormat {
            input: input.into(),
        }
    }

    /// Returns true if the random source failed.
    pub fn is_random_source(&self) -> bool {
        matches!(self, UuidError::RandomSource { .. })
    }

    /// Returns true if the input failed the layout check.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, UuidError::InvalidFormat { .. })
    }

    /// Returns the rejected input for [`UuidError::InvalidFormat`].
    pub fn input(&self) -> Option<&str> {
        match self {
            UuidError::InvalidFormat { input } => Some(input),
            _ => None,
        }
    }
}

/// Unwraps `result`, treating any error as fatal for `op`.
pub(crate) fn or_abort<T>(op: &'static str, result: Result<T, UuidError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(op, error = %err, "unrecoverable UUID error");
            panic!("{op}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_carries_input() {
        let err = UuidError::invalid_format("not-a-uuid");
        assert!(err.is_invalid_format());
        assert!(!err.is_random_source());
        assert_eq!(err.input(), Some("not-a-uuid"));
        assert_eq!(err.to_string(), "invalid UUID v4 input: 'not-a-uuid'");
    }

    #[test]
    fn test_random_source_has_no_input() {
        let err = UuidError::random_source("entropy unavailable");
        assert!(err.is_random_source());
        assert_eq!(err.input(), None);
        assert_eq!(
            err.to_string(),
            "secure random source failed: entropy unavailable"
        );
    }

    #[test]
    fn test_or_abort_passes_ok_through() {
        assert_eq!(or_abort("test", Ok::<_, UuidError>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "parse_or_abort: invalid UUID v4 input: 'x'")]
    fn test_or_abort_panics_with_op_name() {
        or_abort::<()>("parse_or_abort", Err(UuidError::invalid_format("x")));
    }
}
