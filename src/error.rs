//! Error types shared by every stage of the evaluation pipeline.

use thiserror::Error;

/// Errors raised while building the record store or decoding a chromosome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    /// The chromosome does not have `feature_count + decision_gene_count` genes.
    #[error("invalid encoding length: expected {expected} genes, got {actual}")]
    InvalidEncodingLength { expected: usize, actual: usize },

    /// The alfa regression has a zero denominator (fewer than two distinct
    /// rate buckets).
    #[error("degenerate rate distribution: {buckets} distinct rate bucket(s)")]
    DegenerateRateDistribution { buckets: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid record store: {0}")]
    InvalidRecordStore(String),
}

pub type Result<T> = std::result::Result<T, PartitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PartitionError::InvalidEncodingLength {
            expected: 11,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "invalid encoding length: expected 11 genes, got 10"
        );

        let err = PartitionError::DegenerateRateDistribution { buckets: 1 };
        assert!(err.to_string().contains("1 distinct"));
    }
}
