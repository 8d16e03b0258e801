//! Rank scoring for tierscore.
//!
//! This crate is the scoring engine: a pure, synchronous mapping from rank
//! positions to two-decimal scores within a bucket's bounds.
//!
//! - [`score_order`] scores a whole ranked sequence at once; ordering
//!   surfaces call it when a reorder is committed.
//! - [`preview_score`] scores a single position; surfaces call it on every
//!   pointer movement during a drag, before anything is committed.
//! - [`move_item`] is the array move a drop performs right before the full
//!   rescore.
//!
//! Both scoring paths share one interpolation kernel, so a previewed value
//! always equals the committed one.

pub mod rank;
pub mod reorder;

pub use rank::{preview_score, score_order};
pub use reorder::move_item;
