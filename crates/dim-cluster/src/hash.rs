use sha2::{Digest, Sha256};

use crate::adjacency::AdjacencyGraph;
use crate::ring::ConnectedTable;

/// Computes the canonical structural hash of a connected table.
pub fn table_hash(table: &ConnectedTable) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"bucket-table");
    hasher.update(table.threshold().to_le_bytes());
    hasher.update((table.config().initial_size as u64).to_le_bytes());
    hasher.update((table.table_size() as u64).to_le_bytes());
    hasher.update((table.item_count() as u64).to_le_bytes());
    for bucket in table.buckets() {
        update_values(bucket.iter().map(|dim| dim.as_raw()), bucket.len(), &mut hasher);
    }
    format!("{:x}", hasher.finalize())
}

/// Computes the canonical structural hash of an adjacency graph.
pub fn graph_hash(graph: &AdjacencyGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"adjacency-graph");
    hasher.update((graph.node_count() as u64).to_le_bytes());
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for (node, neighbours) in graph.iter() {
        hasher.update(node.as_raw().to_le_bytes());
        update_values(
            neighbours.iter().map(|dim| dim.as_raw()),
            neighbours.len(),
            &mut hasher,
        );
    }
    format!("{:x}", hasher.finalize())
}

fn update_values(values: impl Iterator<Item = i64>, len: usize, hasher: &mut Sha256) {
    hasher.update((len as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
