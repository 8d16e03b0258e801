//! In-memory item store, standing in for the persistence layer.
//!
//! The scoring engine never sees this type. The store reads the current
//! order of a bucket out, hands it to the scorer, and writes the returned
//! `(rank_index, score)` pairs back onto the items in one pass. It is an
//! owned value handed to whoever drives it, not a module-level singleton.

use rust_decimal::Decimal;
use tierscore::{move_item, score_order, BucketTable, Result, ScoreResult};

/// One stored item with its last-computed rank and score.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub bucket: String,
    pub rank_index: usize,
    pub score: Decimal,
}

/// Owned, in-memory collection of ranked items grouped by bucket.
pub struct ItemStore {
    table: BucketTable,
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    pub fn new(table: BucketTable) -> Self {
        ItemStore {
            table,
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn table(&self) -> &BucketTable {
        &self.table
    }

    /// Adds an item at the top of its bucket and rescores the bucket.
    ///
    /// Returns the new item's id.
    pub fn add(&mut self, name: &str, bucket: &str) -> Result<String> {
        // Resolve the bucket before touching any state.
        self.table.bounds_for(bucket)?;

        let id = format!("item-{}", self.next_id);
        self.next_id += 1;

        let mut order = self.bucket_order(bucket);
        order.insert(0, id.clone());

        self.items.push(Item {
            id: id.clone(),
            name: name.to_owned(),
            bucket: bucket.to_owned(),
            rank_index: 0,
            score: Decimal::ZERO,
        });
        self.apply_scores(bucket, &order)?;
        Ok(id)
    }

    /// Removes an item and rescores what remains of its bucket.
    ///
    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return Ok(());
        };
        let bucket = self.items.remove(position).bucket;
        let order = self.bucket_order(&bucket);
        self.apply_scores(&bucket, &order)?;
        Ok(())
    }

    /// Moves an item within its bucket from rank `from` to rank `to`, then
    /// rescores the whole bucket in one call.
    pub fn reorder(&mut self, bucket: &str, from: usize, to: usize) -> Result<Vec<ScoreResult>> {
        let mut order = self.bucket_order(bucket);
        move_item(&mut order, from, to)?;
        self.apply_scores(bucket, &order)
    }

    /// Current identifiers of a bucket, best first.
    pub fn bucket_order(&self, bucket: &str) -> Vec<String> {
        let mut members: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.bucket == bucket)
            .collect();
        members.sort_by_key(|item| item.rank_index);
        members.into_iter().map(|item| item.id.clone()).collect()
    }

    /// A bucket's items, best first.
    pub fn items_in(&self, bucket: &str) -> Vec<&Item> {
        let mut members: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.bucket == bucket)
            .collect();
        members.sort_by_key(|item| item.rank_index);
        members
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Scores `order` and writes every pair back. Nothing is written unless
    /// the whole sequence scored.
    fn apply_scores(&mut self, bucket: &str, order: &[String]) -> Result<Vec<ScoreResult>> {
        let bounds = self.table.bounds_for(bucket)?;
        let results = score_order(order, &bounds)?;
        for result in &results {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == result.id) {
                item.rank_index = result.rank_index;
                item.score = result.score;
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ItemStore {
        ItemStore::new(BucketTable::standard())
    }

    #[test]
    fn first_item_in_a_bucket_gets_the_midpoint() {
        let mut store = store();
        let id = store.add("carbonara", "REALLY_GOOD").unwrap();

        let item = store.get(&id).unwrap();
        assert_eq!(item.rank_index, 0);
        assert_eq!(item.score, Decimal::new(85, 1));
    }

    #[test]
    fn new_items_enter_at_the_top_and_everything_rescores() {
        let mut store = store();
        let first = store.add("carbonara", "REALLY_GOOD").unwrap();
        let second = store.add("ramen", "REALLY_GOOD").unwrap();

        assert_eq!(store.get(&second).unwrap().rank_index, 0);
        assert_eq!(store.get(&second).unwrap().score, Decimal::from(10));
        assert_eq!(store.get(&first).unwrap().rank_index, 1);
        assert_eq!(store.get(&first).unwrap().score, Decimal::from(7));
    }

    #[test]
    fn reorder_matches_scoring_the_new_order_from_scratch() {
        let mut store = store();
        for name in ["a", "b", "c", "d"] {
            store.add(name, "AVERAGE").unwrap();
        }

        store.reorder("AVERAGE", 3, 1).unwrap();

        let order = store.bucket_order("AVERAGE");
        let bounds = store.table().bounds_for("AVERAGE").unwrap();
        let fresh = score_order(&order, &bounds).unwrap();
        for result in fresh {
            let item = store.get(&result.id).unwrap();
            assert_eq!(item.rank_index, result.rank_index);
            assert_eq!(item.score, result.score);
        }
    }

    #[test]
    fn removal_rescores_the_remaining_items() {
        let mut store = store();
        let first = store.add("carbonara", "REALLY_GOOD").unwrap();
        let second = store.add("ramen", "REALLY_GOOD").unwrap();
        let third = store.add("tacos", "REALLY_GOOD").unwrap();

        store.remove(&second).unwrap();

        assert_eq!(store.get(&third).unwrap().score, Decimal::from(10));
        assert_eq!(store.get(&first).unwrap().score, Decimal::from(7));
        assert!(store.get(&second).is_none());
    }

    #[test]
    fn unknown_bucket_is_rejected_before_any_state_changes() {
        let mut store = store();
        assert!(store.add("mystery", "LEGENDARY").is_err());
        assert!(store.items_in("LEGENDARY").is_empty());
    }
}
