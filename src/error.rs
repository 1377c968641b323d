//! Error types for the checked kernel entry points.
//!
//! The kernels themselves have no failure channel. Only the `try_*` wrappers in
//! [`crate::kernels`] validate the buffer contract and report violations here.

use std::fmt;

/// Violations of the array kernel contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneMathError {
    /// Two buffers that must be the same length are not.
    LengthMismatch {
        /// Length of the first input buffer.
        expected: usize,
        /// Length of the offending buffer.
        actual: usize,
    },
    /// The buffer length is not a whole number of lane groups.
    RaggedLength {
        /// Length of the buffers.
        len: usize,
        /// Lane width of the kernel.
        lanes: usize,
    },
}

impl fmt::Display for LaneMathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneMathError::LengthMismatch { expected, actual } => write!(
                f,
                "Buffer length mismatch: expected {} elements, got {}",
                expected, actual
            ),
            LaneMathError::RaggedLength { len, lanes } => write!(
                f,
                "Buffer length {} is not a multiple of the lane width {} ({} trailing elements)",
                len,
                lanes,
                len % lanes
            ),
        }
    }
}

impl std::error::Error for LaneMathError {}

/// Result type alias for the checked kernels.
pub type Result<T> = std::result::Result<T, LaneMathError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> LaneMathError {
    LaneMathError::LengthMismatch { expected, actual }
}

/// Creates a ragged length error.
pub fn ragged_length(len: usize, lanes: usize) -> LaneMathError {
    LaneMathError::RaggedLength { len, lanes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(16, 12);
        let display = format!("{}", error);
        assert!(display.contains("Buffer length mismatch"));
        assert!(display.contains("expected 16"));
        assert!(display.contains("got 12"));
    }

    #[test]
    fn test_ragged_length_display() {
        let error = ragged_length(10, 4);
        let display = format!("{}", error);
        assert!(display.contains("not a multiple of the lane width 4"));
        assert!(display.contains("2 trailing elements"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ragged_length(10, 4), ragged_length(10, 4));
        assert_ne!(ragged_length(10, 4), ragged_length(10, 2));
        assert_ne!(ragged_length(10, 4), length_mismatch(10, 4));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = length_mismatch(8, 4);
        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
