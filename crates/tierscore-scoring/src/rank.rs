//! Rank-to-score mapping.
//!
//! Given a bucket's bounds and an ordered sequence of item identifiers
//! (index 0 = best), every item receives a score by linear interpolation:
//! rank 0 maps to the upper bound, the last rank to the lower bound, a
//! single item to the midpoint. Scores carry two decimal places.
//!
//! Both entry points run through one private kernel, so the full-sequence
//! path and the single-position preview cannot drift apart.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tierscore_core::score::round_score;
use tierscore_core::{BucketBounds, Result, ScoreResult, TierscoreError};

/// Scores every identifier in a ranked sequence, preserving input order.
///
/// An empty sequence is not an error; it scores to an empty vec. The call is
/// pure and stateless: identical inputs yield identical outputs, and nothing
/// is scored if any identifier fails validation.
///
/// # Errors
///
/// Returns [`TierscoreError::InvalidBounds`] if the interval is inverted and
/// [`TierscoreError::DuplicateId`] if an identifier repeats.
///
/// # Examples
///
/// ```
/// use tierscore_core::BucketTable;
/// use tierscore_scoring::score_order;
///
/// let bounds = BucketTable::standard().bounds_for("REALLY_GOOD")?;
/// let results = score_order(&["carbonara", "ramen", "tacos"], &bounds)?;
///
/// assert_eq!(results[0].score.to_string(), "10");
/// assert_eq!(results[1].score.to_string(), "8.5");
/// assert_eq!(results[2].score.to_string(), "7");
/// # Ok::<(), tierscore_core::TierscoreError>(())
/// ```
pub fn score_order<I>(ids_in_order: &[I], bounds: &BucketBounds) -> Result<Vec<ScoreResult>>
where
    I: AsRef<str>,
{
    bounds.validate()?;

    let mut seen = HashSet::with_capacity(ids_in_order.len());
    for id in ids_in_order {
        if !seen.insert(id.as_ref()) {
            return Err(TierscoreError::DuplicateId(id.as_ref().to_owned()));
        }
    }

    let total = ids_in_order.len();
    Ok(ids_in_order
        .iter()
        .enumerate()
        .map(|(rank_index, id)| ScoreResult {
            id: id.as_ref().to_owned(),
            rank_index,
            score: rank_score(rank_index, total, bounds),
        })
        .collect())
}

/// Scores one rank position without materializing the whole sequence.
///
/// Intended for live feedback while an item is being dragged: the value is
/// identical to what [`score_order`] would assign the item at `position` in
/// a sequence of `total_items`.
///
/// # Errors
///
/// Returns [`TierscoreError::InvalidBounds`] if the interval is inverted and
/// [`TierscoreError::PositionOutOfRange`] if `position >= total_items`
/// (which also covers an empty sequence).
pub fn preview_score(position: usize, total_items: usize, bounds: &BucketBounds) -> Result<Decimal> {
    bounds.validate()?;
    if position >= total_items {
        return Err(TierscoreError::PositionOutOfRange {
            position,
            total: total_items,
        });
    }
    Ok(rank_score(position, total_items, bounds))
}

/// Shared interpolation kernel for both scoring paths.
///
/// Precondition: `position < total`. Endpoints are exact: the numerator
/// equals the denominator at rank 0 and zero at the last rank, so rounding
/// never pulls the top or bottom score off the bounds.
fn rank_score(position: usize, total: usize, bounds: &BucketBounds) -> Decimal {
    debug_assert!(position < total);

    if total == 1 {
        return round_score(bounds.midpoint());
    }

    let steps_from_bottom = Decimal::from((total - 1 - position) as u64);
    let last_rank = Decimal::from((total - 1) as u64);
    round_score(bounds.lower() + bounds.width() * steps_from_bottom / last_rank)
}
