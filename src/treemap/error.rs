//! Treemap layout error types

use thiserror::Error;

/// Errors raised while validating a size tree or drawing area
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreemapError {
    /// Node has both a size and children, or neither
    #[error("Malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    /// Leaf size is negative, NaN or infinite
    #[error("Invalid size {size} at {path}: sizes must be finite and non-negative")]
    InvalidSize { path: String, size: f64 },

    /// Drawing area or padding is unusable
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type alias for layout operations
pub type TreemapResult<T> = Result<T, TreemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TreemapError::MalformedNode {
            path: "Tech Pulse/AI".to_string(),
            reason: "node has neither size nor children".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed node at Tech Pulse/AI: node has neither size nor children"
        );

        let err = TreemapError::InvalidSize {
            path: "root/x".to_string(),
            size: -1.0,
        };
        assert!(err.to_string().contains("-1"));
    }
}
