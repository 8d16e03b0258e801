//! Rankboard demo
//!
//! Drives the tierscore engine the way the real app does: items get rated
//! into buckets, a bucket is reordered by drag and drop, and every change
//! writes freshly computed scores back to the store. During the simulated
//! drag only the single-position preview runs; the full-sequence scorer
//! runs once, on drop.

mod store;

use store::ItemStore;
use tierscore::{preview_score, BucketConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A buckets.toml next to the working directory overrides the standard table.
    let table = BucketConfig::load("buckets.toml")
        .unwrap_or_default()
        .into_table()?;
    let mut store = ItemStore::new(table);

    for (name, bucket) in [
        ("Carbonara", "REALLY_GOOD"),
        ("Airport sushi", "NOT_GREAT"),
        ("Ramen", "REALLY_GOOD"),
        ("Caesar salad", "AVERAGE"),
        ("Tacos al pastor", "REALLY_GOOD"),
        ("Hotel omelette", "AVERAGE"),
    ] {
        let id = store.add(name, bucket)?;
        info!(id = %id, name, bucket, "item rated");
    }

    // Carbonara was rated first, so by now it sits at the bottom of its
    // bucket. Drag it back to the top: preview every position the pointer
    // passes, then commit the drop with a single full rescore.
    let bucket = "REALLY_GOOD";
    let total = store.bucket_order(bucket).len();
    let bounds = store.table().bounds_for(bucket)?;
    for position in (0..total).rev() {
        let projected = preview_score(position, total, &bounds)?;
        info!(position, %projected, "drag preview");
    }

    let results = store.reorder(bucket, total - 1, 0)?;
    info!(bucket, rescored = results.len(), "reorder committed");

    print_board(&store);
    Ok(())
}

fn print_board(store: &ItemStore) {
    println!();
    for bucket in store.table().iter() {
        println!(
            "{} [{} - {}]",
            bucket.label,
            bucket.bounds.lower(),
            bucket.bounds.upper()
        );
        for item in store.items_in(&bucket.key) {
            println!("  #{} {:<18} {}", item.rank_index + 1, item.name, item.score);
        }
        println!();
    }
}
