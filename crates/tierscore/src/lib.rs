//! Tierscore - Bucket ranking with rank-derived scores
//!
//! Place items into ordered buckets and derive every item's score purely
//! from its rank position: the top of a bucket maps to the bucket's upper
//! bound, the bottom to its lower bound, everything between is evenly
//! spaced, and a lone item sits at the midpoint.
//!
//! # Example
//!
//! ```rust
//! use tierscore::prelude::*;
//!
//! let table = BucketTable::standard();
//! let bounds = table.bounds_for("REALLY_GOOD")?;
//!
//! // Committing a reorder scores the whole sequence at once.
//! let results = score_order(&["carbonara", "ramen", "tacos"], &bounds)?;
//! assert_eq!(results[1].score.to_string(), "8.5");
//!
//! // During a drag, preview a single position instead.
//! assert_eq!(preview_score(0, 3, &bounds)?, results[0].score);
//! # Ok::<(), tierscore::TierscoreError>(())
//! ```

// Core types
pub use tierscore_core::{
    round_score, Bucket, BucketBounds, BucketTable, Result, ScoreResult, TierscoreError,
    SCORE_DECIMALS,
};

// Scoring engine
pub use tierscore_scoring::{move_item, preview_score, score_order};

// Configuration
pub use tierscore_config::{BucketConfig, BucketEntry, ConfigError};

pub mod prelude {
    pub use super::{
        move_item, preview_score, score_order, Bucket, BucketBounds, BucketConfig, BucketTable,
        ScoreResult, TierscoreError,
    };
}
