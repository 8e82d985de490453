//! Batch Cleaning and Filtering

use crate::record::{CleanedRecord, RawFlightRecord};
use std::collections::HashMap;
use tracing::info;

/// Origins with this many flights or fewer in a batch are dropped; their
/// delay-rate estimates are too noisy to train on.
pub const MIN_ORIGIN_FLIGHTS: u64 = 750;

/// Clean a batch of raw records.
///
/// Cancelled flights and flights missing arrival data are dropped,
/// remaining gaps are zero-filled, the binary delay target is labeled,
/// and origins with `MIN_ORIGIN_FLIGHTS` or fewer flights are excluded.
/// These exclusions are routine data-quality filtering, not errors, so
/// the pass never fails. Running it again on its own output removes
/// nothing further.
pub fn clean_records(records: &[RawFlightRecord]) -> Vec<CleanedRecord> {
    let usable: Vec<&RawFlightRecord> = records.iter().filter(|r| r.is_usable()).collect();

    let mut origin_counts: HashMap<&str, u64> = HashMap::new();
    for record in &usable {
        *origin_counts.entry(record.origin.as_str()).or_insert(0) += 1;
    }

    let cleaned: Vec<CleanedRecord> = usable
        .iter()
        .filter(|r| origin_counts[r.origin.as_str()] > MIN_ORIGIN_FLIGHTS)
        .map(|r| r.to_cleaned(origin_counts[r.origin.as_str()]))
        .collect();

    info!(
        "Cleaned batch: {} raw, {} usable, {} retained after origin filter",
        records.len(),
        usable.len(),
        cleaned.len()
    );

    cleaned
}
