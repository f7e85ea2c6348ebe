//! Error handling for the strata library
//!
//! All fallible container operations return [`Result`]. Absent keys are
//! never errors; lookups report absence through `Option`.

use thiserror::Error;

/// Main error type for the strata library
#[derive(Error, Debug)]
pub enum StrataError {
    /// Memory allocation failures
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// Internal structural inconsistency
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },
}

impl StrataError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfMemory { .. } => true,
            Self::Configuration { .. } => false,
            Self::InvalidData { .. } => false,
            Self::OutOfBounds { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "memory",
            Self::Configuration { .. } => "config",
            Self::InvalidData { .. } => "data",
            Self::OutOfBounds { .. } => "bounds",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StrataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = StrataError::out_of_memory(4096);
        assert_eq!(err.category(), "memory");
        assert!(err.is_recoverable());

        let err = StrataError::configuration("degree must be >= 2");
        assert_eq!(err.category(), "config");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let display = format!("{}", StrataError::out_of_memory(128));
        assert!(display.contains("128"));

        let display = format!("{}", StrataError::out_of_bounds(10, 5));
        assert!(display.contains("10"));
        assert!(display.contains("5"));
    }
}
