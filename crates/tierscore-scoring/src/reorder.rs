//! In-place reorder for ordering surfaces.
//!
//! On drop, a drag-and-drop list moves one element from its old position to
//! the new one, then rescores the whole sequence once. `move_item` is that
//! move; the rescore is [`score_order`](crate::score_order).

use tierscore_core::{Result, TierscoreError};

/// Moves the element at `from` so it ends up at `to`, shifting everything
/// between the two positions by one place.
///
/// Equivalent to removing the element and reinserting it at `to`. Moving an
/// element onto its own position is a no-op.
///
/// # Errors
///
/// Returns [`TierscoreError::PositionOutOfRange`] if either index is outside
/// the slice.
///
/// # Examples
///
/// ```
/// use tierscore_scoring::move_item;
///
/// let mut ids = vec!["a", "b", "c", "d"];
/// move_item(&mut ids, 3, 1).unwrap();
/// assert_eq!(ids, vec!["a", "d", "b", "c"]);
/// ```
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> Result<()> {
    let total = items.len();
    if from >= total {
        return Err(TierscoreError::PositionOutOfRange {
            position: from,
            total,
        });
    }
    if to >= total {
        return Err(TierscoreError::PositionOutOfRange {
            position: to,
            total,
        });
    }

    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_an_element_toward_the_back() {
        let mut ids = vec!["a", "b", "c", "d", "e"];
        move_item(&mut ids, 1, 3).unwrap();
        assert_eq!(ids, vec!["a", "c", "d", "b", "e"]);
    }

    #[test]
    fn moves_an_element_toward_the_front() {
        let mut ids = vec!["a", "b", "c", "d", "e"];
        move_item(&mut ids, 4, 0).unwrap();
        assert_eq!(ids, vec!["e", "a", "b", "c", "d"]);
    }

    #[test]
    fn moving_onto_the_same_position_changes_nothing() {
        let mut ids = vec!["a", "b", "c"];
        move_item(&mut ids, 1, 1).unwrap();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn matches_remove_then_insert() {
        let mut moved: Vec<u32> = (0..8).collect();
        move_item(&mut moved, 5, 2).unwrap();

        let mut naive: Vec<u32> = (0..8).collect();
        let element = naive.remove(5);
        naive.insert(2, element);

        assert_eq!(moved, naive);
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let mut ids = vec!["a", "b", "c"];
        assert_eq!(
            move_item(&mut ids, 3, 0).unwrap_err(),
            TierscoreError::PositionOutOfRange { position: 3, total: 3 }
        );
        assert_eq!(
            move_item(&mut ids, 0, 5).unwrap_err(),
            TierscoreError::PositionOutOfRange { position: 5, total: 3 }
        );
    }
}
