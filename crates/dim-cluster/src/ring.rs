use std::ops::Deref;

use dim_core::Dimension;
use tracing::debug;

use crate::ids::ring_prev;
use crate::table::BucketTable;

/// Bucket table finalized by the ring connection pass.
///
/// Dereferences to the underlying [`BucketTable`] for read access. There is
/// no way back to a mutable table, so the pass cannot be applied twice.
#[derive(Debug, Clone)]
pub struct ConnectedTable {
    table: BucketTable,
    links_added: usize,
}

impl ConnectedTable {
    /// Returns the number of ring links appended by the pass.
    pub fn links_added(&self) -> usize {
        self.links_added
    }
}

impl Deref for ConnectedTable {
    type Target = BucketTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

/// Computes, per bucket, the ring links the connection pass appends.
///
/// Bucket `i` (when non-empty) links to the front of `i - 1` and, when it is
/// a different slot, the front of `i - 2`, both taken modulo the table size.
/// Fronts are read from the table as given, so the result depends only on
/// the pre-connection front elements.
pub fn ring_links(table: &BucketTable) -> Vec<Vec<Dimension>> {
    let size = table.table_size();
    let fronts: Vec<Option<Dimension>> = (0..size).map(|index| table.front(index)).collect();
    fronts
        .iter()
        .enumerate()
        .map(|(index, front)| {
            let mut links = Vec::with_capacity(2);
            if front.is_none() {
                return links;
            }
            let prev1 = ring_prev(index, 1, size);
            let prev2 = ring_prev(index, 2, size);
            if let Some(dim) = fronts[prev1] {
                links.push(dim);
            }
            if prev2 != prev1 {
                if let Some(dim) = fronts[prev2] {
                    links.push(dim);
                }
            }
            links
        })
        .collect()
}

/// Appends ring links to every non-empty bucket and finalizes the table.
pub fn connect(mut table: BucketTable) -> ConnectedTable {
    let links = ring_links(&table);
    let mut links_added = 0;
    for (bucket, extra) in table.buckets_mut().iter_mut().zip(links) {
        links_added += extra.len();
        bucket.extend(extra);
    }
    debug!(
        table_size = table.table_size(),
        links_added, "connected bucket ring"
    );
    ConnectedTable { table, links_added }
}
