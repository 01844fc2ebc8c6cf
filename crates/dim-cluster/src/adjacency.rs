use std::collections::BTreeMap;

use dim_core::Dimension;

use crate::ring::ConnectedTable;

/// Symmetric adjacency lists derived from a connected bucket table.
///
/// Neighbour lists keep discovery order and may contain duplicates. Keys
/// iterate in ascending dimension order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<Dimension, Vec<Dimension>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Builds the graph from every non-empty bucket of `table`.
    ///
    /// The front of each bucket is its hub. Every later element `x` adds
    /// `hub -> x` and `x -> hub`, so the relation is symmetric as built.
    /// Self-loops from duplicate dimensions are kept.
    pub fn build(table: &ConnectedTable) -> Self {
        let mut graph = Self::default();
        for bucket in table.buckets() {
            let mut members = bucket.iter().copied();
            let Some(hub) = members.next() else {
                continue;
            };
            graph.adjacency.entry(hub).or_default();
            for member in members {
                graph.link(hub, member);
            }
        }
        graph
    }

    fn link(&mut self, hub: Dimension, member: Dimension) {
        self.adjacency.entry(hub).or_default().push(member);
        self.adjacency.entry(member).or_default().push(hub);
        self.edge_count += 1;
    }

    /// Returns the neighbour list of `dim`, if it is a node.
    pub fn neighbors(&self, dim: Dimension) -> Option<&[Dimension]> {
        self.adjacency.get(&dim).map(Vec::as_slice)
    }

    /// Returns whether `dim` is registered as a node.
    pub fn contains(&self, dim: Dimension) -> bool {
        self.adjacency.contains_key(&dim)
    }

    /// Returns the number of entries in the neighbour list of `dim`.
    pub fn degree(&self, dim: Dimension) -> usize {
        self.adjacency.get(&dim).map_or(0, Vec::len)
    }

    /// Returns every node in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Dimension> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns `(node, neighbours)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[Dimension])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, neighbours)| (*node, neighbours.as_slice()))
    }

    /// Returns the number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of hub-to-member links recorded.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Checks that `b` appears in `a`'s list exactly as often as `a` in `b`'s.
    pub fn is_symmetric(&self) -> bool {
        let mut counts: BTreeMap<(Dimension, Dimension), usize> = BTreeMap::new();
        for (node, neighbours) in &self.adjacency {
            for neighbour in neighbours {
                *counts.entry((*node, *neighbour)).or_default() += 1;
            }
        }
        counts
            .iter()
            .all(|((a, b), count)| counts.get(&(*b, *a)) == Some(count))
    }
}
