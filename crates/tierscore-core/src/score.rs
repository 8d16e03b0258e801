//! Score results and the two-decimal rounding rule.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept on every returned score.
pub const SCORE_DECIMALS: u32 = 2;

/// Rounds a raw score to two decimal places, half away from zero.
///
/// The tie rule matters: a single item in the standard `NOT_GREAT` bucket
/// sits at (0 + 3.49) / 2 = 1.745, which must come out as 1.75. Half-to-even
/// would produce 1.74.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tierscore_core::score::round_score;
///
/// assert_eq!(round_score(Decimal::new(1745, 3)), Decimal::new(175, 2));
/// ```
pub fn round_score(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCORE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// The scored outcome for one item.
///
/// Carries the identifier, the zero-based rank the item held when scored
/// (0 = best) and the derived two-decimal score. External stores persist the
/// `(rank_index, score)` pair verbatim alongside the item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub id: String,
    pub rank_index: usize,
    pub score: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_score(Decimal::new(1745, 3)), Decimal::new(175, 2));
        assert_eq!(round_score(Decimal::new(8885, 3)), Decimal::new(889, 2));
        assert_eq!(round_score(Decimal::new(-1745, 3)), Decimal::new(-175, 2));
    }

    #[test]
    fn truncates_long_fractions() {
        let third = Decimal::from(10) / Decimal::from(3);
        assert_eq!(round_score(third), Decimal::new(333, 2));
    }

    #[test]
    fn leaves_exact_values_alone() {
        assert_eq!(round_score(Decimal::new(85, 1)), Decimal::new(85, 1));
        assert_eq!(round_score(Decimal::from(10)), Decimal::from(10));
    }

    #[test]
    fn score_result_serializes_with_plain_numbers() {
        let result = ScoreResult {
            id: "carbonara".to_owned(),
            rank_index: 0,
            score: Decimal::new(85, 1),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"id":"carbonara","rank_index":0,"score":8.5}"#);

        let back: ScoreResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
