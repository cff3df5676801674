//! Fixture store error types

use thiserror::Error;

/// Defects found while assembling a fixture store
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The repository list is empty, so there is no default selection
    #[error("Fixture store has no repository records")]
    Empty,

    /// Two records share an identifier
    #[error("Duplicate repository id: {0}")]
    DuplicateId(String),

    /// Two records share a rank
    #[error("Duplicate rank {rank} (records {first} and {second})")]
    DuplicateRank { rank: u32, first: String, second: String },

    /// A rank of zero was found
    #[error("Rank must be positive for record {0}")]
    ZeroRank(String),
}

/// Result type alias for store construction
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateId("bun".to_string());
        assert_eq!(err.to_string(), "Duplicate repository id: bun");

        let err = StoreError::DuplicateRank {
            rank: 3,
            first: "a".to_string(),
            second: "b".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate rank 3 (records a and b)");
    }
}
