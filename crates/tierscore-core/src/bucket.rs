//! Buckets and the table that maps bucket keys to score bounds.
//!
//! A bucket is one of a small, fixed set of labeled score ranges an item can
//! be placed in. The table is immutable configuration data: it is validated
//! once at construction and only read afterwards.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TierscoreError};

/// Closed interval `[lower, upper]` that a bucket's ranks are mapped into.
///
/// The invariant `lower < upper` is enforced by [`new`](Self::new). Values
/// that arrive through derive-based deserialization bypass the constructor,
/// so consumers that accept bounds from outside re-check with
/// [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tierscore_core::BucketBounds;
///
/// let bounds = BucketBounds::new(Decimal::from(7), Decimal::from(10)).unwrap();
/// assert_eq!(bounds.width(), Decimal::from(3));
/// assert!(bounds.contains(Decimal::new(85, 1)));
///
/// // Inverted intervals are rejected.
/// assert!(BucketBounds::new(Decimal::from(10), Decimal::from(7)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketBounds {
    lower: Decimal,
    upper: Decimal,
}

impl BucketBounds {
    /// Creates bounds, rejecting intervals where `upper <= lower`.
    ///
    /// # Errors
    ///
    /// Returns [`TierscoreError::InvalidBounds`] for inverted or empty
    /// intervals.
    pub fn new(lower: Decimal, upper: Decimal) -> Result<Self> {
        let bounds = BucketBounds { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn lower(&self) -> Decimal {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper(&self) -> Decimal {
        self.upper
    }

    /// Midpoint of the interval, unrounded.
    ///
    /// A bucket holding a single item scores it at the midpoint.
    pub fn midpoint(&self) -> Decimal {
        (self.lower + self.upper) / Decimal::TWO
    }

    /// Width `upper - lower` of the interval.
    pub fn width(&self) -> Decimal {
        self.upper - self.lower
    }

    /// Returns true if `value` lies within the closed interval.
    pub fn contains(&self, value: Decimal) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Re-checks the `lower < upper` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`TierscoreError::InvalidBounds`] if `upper <= lower`.
    pub fn validate(&self) -> Result<()> {
        if self.upper <= self.lower {
            return Err(TierscoreError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

/// A labeled score range an item can be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Stable identifier used by ordering surfaces and stores.
    pub key: String,
    /// Human-readable name shown in UIs.
    pub label: String,
    /// The score interval ranks in this bucket are mapped into.
    pub bounds: BucketBounds,
}

impl Bucket {
    /// Creates a bucket from its key, label and bounds.
    pub fn new(key: impl Into<String>, label: impl Into<String>, bounds: BucketBounds) -> Self {
        Bucket {
            key: key.into(),
            label: label.into(),
            bounds,
        }
    }
}

/// The fixed set of buckets for one deployment, keyed by bucket key.
///
/// Invariants held after construction: at least one bucket, unique keys, and
/// intervals listed in ascending, non-overlapping order. Closed intervals
/// that share an endpoint count as overlapping.
///
/// # Examples
///
/// ```
/// use tierscore_core::BucketTable;
///
/// let table = BucketTable::standard();
/// let bounds = table.bounds_for("AVERAGE").unwrap();
/// assert_eq!(bounds.lower().to_string(), "3.5");
/// assert_eq!(bounds.upper().to_string(), "6.99");
///
/// assert!(table.bounds_for("LEGENDARY").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    buckets: Vec<Bucket>,
}

impl BucketTable {
    /// Creates a table from buckets listed in ascending score order.
    ///
    /// # Errors
    ///
    /// Returns [`TierscoreError::InvalidTable`] for an empty list, a
    /// duplicate key, or intervals that overlap or are out of order, and
    /// [`TierscoreError::InvalidBounds`] if any single interval is inverted.
    pub fn new(buckets: Vec<Bucket>) -> Result<Self> {
        if buckets.is_empty() {
            return Err(TierscoreError::InvalidTable(
                "bucket table must contain at least one bucket".to_owned(),
            ));
        }

        let mut keys = HashSet::new();
        for bucket in &buckets {
            bucket.bounds.validate()?;
            if !keys.insert(bucket.key.as_str()) {
                return Err(TierscoreError::InvalidTable(format!(
                    "duplicate bucket key '{}'",
                    bucket.key
                )));
            }
        }

        for pair in buckets.windows(2) {
            if pair[1].bounds.lower() <= pair[0].bounds.upper() {
                return Err(TierscoreError::InvalidTable(format!(
                    "buckets '{}' and '{}' overlap or are out of order",
                    pair[0].key, pair[1].key
                )));
            }
        }

        Ok(BucketTable { buckets })
    }

    /// The built-in three-bucket table spanning 0 to 10.
    pub fn standard() -> Self {
        BucketTable {
            buckets: vec![
                Bucket::new(
                    "NOT_GREAT",
                    "Not Great",
                    BucketBounds {
                        lower: Decimal::ZERO,
                        upper: Decimal::new(349, 2),
                    },
                ),
                Bucket::new(
                    "AVERAGE",
                    "Average",
                    BucketBounds {
                        lower: Decimal::new(35, 1),
                        upper: Decimal::new(699, 2),
                    },
                ),
                Bucket::new(
                    "REALLY_GOOD",
                    "Really Good",
                    BucketBounds {
                        lower: Decimal::from(7),
                        upper: Decimal::from(10),
                    },
                ),
            ],
        }
    }

    /// Resolves a bucket key to its score bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TierscoreError::UnknownBucket`] if the key is not in the
    /// table.
    pub fn bounds_for(&self, key: &str) -> Result<BucketBounds> {
        self.get(key)
            .map(|bucket| bucket.bounds)
            .ok_or_else(|| TierscoreError::UnknownBucket(key.to_owned()))
    }

    /// Looks up a bucket by key.
    pub fn get(&self, key: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| bucket.key == key)
    }

    /// Looks up a bucket's label by key.
    pub fn label_for(&self, key: &str) -> Option<&str> {
        self.get(key).map(|bucket| bucket.label.as_str())
    }

    /// Finds the bucket whose interval contains `score`, if any.
    ///
    /// Returns `None` for scores that fall in a gap between buckets.
    pub fn bucket_for_score(&self, score: Decimal) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| bucket.bounds.contains(score))
    }

    /// Iterates buckets in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    /// Number of buckets in the table.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the table has no buckets (never true after `new`).
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
