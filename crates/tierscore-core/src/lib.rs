//! Tierscore Core - Core types for the bucket-ranking engine
//!
//! This crate provides the fundamental pieces of tierscore:
//! - Bucket tables mapping bucket keys to score bounds
//! - Score results produced by the rank scorer
//! - The shared error taxonomy

pub mod bucket;
pub mod error;
pub mod score;

pub use bucket::{Bucket, BucketBounds, BucketTable};
pub use error::{Result, TierscoreError};
pub use score::{round_score, ScoreResult, SCORE_DECIMALS};
