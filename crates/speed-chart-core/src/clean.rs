// File: crates/speed-chart-core/src/clean.rs
// Summary: Data-quality filter turning raw rows into the sorted, truncated dataset.

use tracing::debug;

use crate::record::{Dataset, Datum, RawRecord, Rejection};
use crate::types::TOP_N;

/// Filter, sort and truncate to the fixed top-N.
pub fn clean<I>(records: I) -> Dataset
where
    I: IntoIterator<Item = RawRecord>,
{
    clean_with_limit(records, TOP_N)
}

/// Same as [`clean`] with a caller-chosen limit, capped at [`TOP_N`].
pub fn clean_with_limit<I>(records: I, limit: usize) -> Dataset
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut kept = Vec::new();
    let mut dropped = 0usize;
    for raw in records {
        match Datum::from_raw(&raw) {
            Ok(d) => kept.push(d),
            Err(_) => dropped += 1,
        }
    }
    debug!(kept = kept.len(), dropped, "filtered raw records");

    // Stable: equal values keep their source order.
    kept.sort_by(|a, b| b.value().total_cmp(&a.value()));
    kept.truncate(limit.min(TOP_N));
    Dataset::from_sorted(kept)
}

/// Rows that did not survive validation, with the reason, in source order.
/// Used for diagnostics only; [`clean`] never reports them.
pub fn rejected(records: &[RawRecord]) -> Vec<(usize, &RawRecord, Rejection)> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| Datum::from_raw(raw).err().map(|why| (i, raw, why)))
        .collect()
}
