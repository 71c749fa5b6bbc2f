// ============================================================================
// Pair Errors
// Error types for capability-driven pair arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while operating on a `NumericPair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairError {
    /// No arithmetic capability was supplied to an operation that needs one
    MissingCapability,
    /// Adding a pair component went above what the element type can hold
    Overflow,
    /// Adding a pair component went below what the element type can hold
    Underflow,
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::MissingCapability => {
                write!(f, "missing capability: no arithmetic capability supplied")
            },
            PairError::Overflow => {
                write!(f, "pair component overflow: sum is above the element type's range")
            },
            PairError::Underflow => {
                write!(f, "pair component underflow: sum is below the element type's range")
            },
        }
    }
}

impl std::error::Error for PairError {}

/// Result type alias for pair operations
pub type PairResult<T> = Result<T, PairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PairError::MissingCapability.to_string(),
            "missing capability: no arithmetic capability supplied"
        );
        assert_eq!(
            PairError::Overflow.to_string(),
            "pair component overflow: sum is above the element type's range"
        );
        assert_eq!(
            PairError::Underflow.to_string(),
            "pair component underflow: sum is below the element type's range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(PairError::Overflow, PairError::Overflow);
        assert_ne!(PairError::Overflow, PairError::Underflow);
        assert_ne!(PairError::MissingCapability, PairError::Overflow);
    }
}
