//! Module: index
//! Responsibility: index-key derivation and the query-factory boundary.
//! Does not own: key storage or query execution.
//! Boundary: rules hand out `Indexer`s; callers persist the keys and
//! implement `IndexQueryFactory` over their own storage.

mod indexer;
mod key;
mod query;

#[cfg(test)]
mod tests;

// re-exports
pub use crate::context::IndexingOptions;
pub use indexer::{Indexer, IndexerKind};
pub use key::IndexKey;
pub use query::IndexQueryFactory;

/// Big-endian `u32` length used by length-keyed approximate indexes.
#[must_use]
pub fn length_key(len: usize) -> [u8; 4] {
    u32::try_from(len).unwrap_or(u32::MAX).to_be_bytes()
}

/// Every window of `key_size` bytes starting at each offset; windows near the
/// end are truncated, so `ABCDE` at size 3 yields `ABC BCD CDE DE E`.
#[must_use]
pub fn substring_windows(value: &[u8], key_size: usize) -> Vec<&[u8]> {
    let key_size = key_size.max(1);

    (0..value.len())
        .map(|start| &value[start..value.len().min(start + key_size)])
        .collect()
}
