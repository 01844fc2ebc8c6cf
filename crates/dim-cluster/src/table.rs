use std::collections::VecDeque;

use dim_core::{errors::DimError, Dimension};
use tracing::debug;

use crate::flags::TableConfig;
use crate::ids::slot_of;

/// Chain of dimensions sharing a slot, most recently inserted first.
pub type Bucket = VecDeque<Dimension>;

/// Chained hash table over dimension identifiers.
///
/// New dimensions are prepended to their chain, so the front of a bucket is
/// always the most recent insertion for that slot. Once
/// `item_count / table_size` reaches the configured threshold, the table
/// doubles and replays every stored dimension.
#[derive(Debug, Clone)]
pub struct BucketTable {
    config: TableConfig,
    buckets: Vec<Bucket>,
    item_count: usize,
    rehash_count: usize,
}

impl BucketTable {
    /// Creates an empty table with `config.initial_size` buckets.
    pub fn new(config: TableConfig) -> Result<Self, DimError> {
        config.validate()?;
        Ok(Self {
            config,
            buckets: empty_buckets(config.initial_size),
            item_count: 0,
            rehash_count: 0,
        })
    }

    /// Convenience constructor validating the raw parameters.
    pub fn with_params(initial_size: usize, threshold: f64) -> Result<Self, DimError> {
        Self::new(TableConfig::new(initial_size, threshold)?)
    }

    /// Returns the configuration the table was created with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Inserts a dimension at the front of its bucket, rehashing on overflow.
    pub fn insert(&mut self, dim: Dimension) {
        let slot = slot_of(dim, self.buckets.len());
        self.buckets[slot].push_front(dim);
        self.item_count += 1;
        if self.load_factor() >= self.config.load_factor_threshold {
            self.rehash();
        }
    }

    /// Inserts every dimension of `dims` in iteration order.
    pub fn extend<I>(&mut self, dims: I)
    where
        I: IntoIterator<Item = Dimension>,
    {
        for dim in dims {
            self.insert(dim);
        }
    }

    /// Doubles the table and replays every stored dimension through [`insert`](Self::insert).
    ///
    /// Buckets are replayed in slot order, each front to back. Replay may
    /// trigger a nested rehash when a single doubling is not enough.
    pub fn rehash(&mut self) {
        let old_size = self.buckets.len();
        let new_size = old_size * 2;
        let snapshot = std::mem::replace(&mut self.buckets, empty_buckets(new_size));
        self.item_count = 0;
        self.rehash_count += 1;
        debug!(old_size, new_size, "rehashing bucket table");
        for bucket in snapshot {
            for dim in bucket {
                self.insert(dim);
            }
        }
    }

    /// Returns the current number of buckets.
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored dimensions, duplicates included.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the configured rehash threshold.
    pub fn threshold(&self) -> f64 {
        self.config.load_factor_threshold
    }

    /// Returns how many times the table has doubled, nested rehashes included.
    pub fn rehash_count(&self) -> usize {
        self.rehash_count
    }

    /// Returns `item_count / table_size`.
    pub fn load_factor(&self) -> f64 {
        self.item_count as f64 / self.buckets.len() as f64
    }

    /// Returns the bucket stored at `index`, if it exists.
    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Returns all buckets in slot order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Returns the most recently inserted dimension of the bucket at `index`.
    pub fn front(&self, index: usize) -> Option<Dimension> {
        self.buckets.get(index).and_then(|bucket| bucket.front().copied())
    }

    /// Returns whether no dimension has been inserted.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Flattens the table in slot order, each bucket front to back.
    pub fn dimensions(&self) -> Vec<Dimension> {
        self.buckets.iter().flatten().copied().collect()
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut [Bucket] {
        &mut self.buckets
    }
}

fn empty_buckets(size: usize) -> Vec<Bucket> {
    (0..size).map(|_| Bucket::new()).collect()
}
