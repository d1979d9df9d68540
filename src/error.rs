//! Error types for checked widget construction.
//!
//! Rendering and mutation never fail: out-of-range values are clamped and
//! scroll positions wrap. Only the `try_*` constructors report errors.

use thiserror::Error;

/// Errors reported by checked constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lower bound is above the upper bound.
    #[error("invalid bounds: minimum {minimum} is greater than maximum {maximum}")]
    InvalidBounds {
        /// Requested lower bound.
        minimum: i64,
        /// Requested upper bound.
        maximum: i64,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_message() {
        let err = Error::InvalidBounds {
            minimum: 10,
            maximum: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid bounds: minimum 10 is greater than maximum 5"
        );
    }
}
