//! Error types for tierscore

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for tierscore operations.
///
/// Every variant is a local validation failure surfaced synchronously to the
/// caller. None are retryable: they indicate a caller bug, not a transient
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierscoreError {
    /// A bucket key that is not part of the configured table.
    #[error("unknown bucket key '{0}'")]
    UnknownBucket(String),

    /// A score interval whose upper bound does not exceed its lower bound.
    #[error("invalid bounds: upper {upper} must exceed lower {lower}")]
    InvalidBounds { lower: Decimal, upper: Decimal },

    /// An item identifier that appears more than once in a ranked sequence.
    #[error("duplicate item id '{0}' in ranked sequence")]
    DuplicateId(String),

    /// A rank position outside the valid range for the sequence length.
    #[error("position {position} out of range for {total} item(s)")]
    PositionOutOfRange { position: usize, total: usize },

    /// A bucket table that violates a structural invariant.
    #[error("invalid bucket table: {0}")]
    InvalidTable(String),
}

/// Result type alias for tierscore operations.
pub type Result<T> = std::result::Result<T, TierscoreError>;
