use dim_cluster::{connect, render, AdjacencyGraph, BucketTable, ConnectedTable, ExportMode};
use dim_core::Dimension;

fn connected(size: usize, threshold: f64, raw: &[i64]) -> ConnectedTable {
    let mut table = BucketTable::with_params(size, threshold).unwrap();
    table.extend(raw.iter().copied().map(Dimension::from_raw));
    connect(table)
}

fn neighbours(graph: &AdjacencyGraph, raw: i64) -> Vec<i64> {
    graph
        .neighbors(Dimension::from_raw(raw))
        .unwrap()
        .iter()
        .map(|dim| dim.as_raw())
        .collect()
}

fn count(list: &[i64], value: i64) -> usize {
    list.iter().filter(|entry| **entry == value).count()
}

#[test]
fn three_slot_ring_graph_is_symmetric() {
    let table = connected(3, 2.0, &[0, 1, 2]);
    let graph = AdjacencyGraph::build(&table);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.is_symmetric());

    // Hub 0 contributes its own bucket first.
    let zero = neighbours(&graph, 0);
    assert_eq!(&zero[..2], &[2, 1]);

    let one = neighbours(&graph, 1);
    let two = neighbours(&graph, 2);
    for (a, list_a) in [(0, &zero), (1, &one), (2, &two)] {
        for (b, list_b) in [(0, &zero), (1, &one), (2, &two)] {
            assert_eq!(count(list_a, b), count(list_b, a), "pair ({a}, {b})");
        }
    }
    assert_eq!(count(&one, 0), 2);
    assert_eq!(count(&one, 2), 2);
}

#[test]
fn graph_export_lists_each_node_with_neighbours() {
    let table = connected(3, 2.0, &[0, 1, 2]);
    let text = render(&table, ExportMode::Graph).unwrap();
    let mut lines: Vec<Vec<i64>> = text
        .lines()
        .map(|line| line.split(' ').map(|tok| tok.parse().unwrap()).collect())
        .collect();
    lines.sort_by_key(|fields| fields[0]);
    assert_eq!(lines.len(), 3);
    for fields in &lines {
        assert_eq!(fields.len(), 5);
    }
    assert_eq!(lines[0], vec![0, 2, 1, 1, 2]);
}

#[test]
fn self_loops_are_kept() {
    let table = connected(1, 10.0, &[5]);
    let graph = AdjacencyGraph::build(&table);
    assert_eq!(neighbours(&graph, 5), vec![5, 5]);
    assert!(graph.is_symmetric());
    assert_eq!(render(&table, ExportMode::Graph).unwrap(), "5 5 5\n");
}

#[test]
fn isolated_hub_is_registered_but_not_exported() {
    let table = connected(5, 10.0, &[0]);
    let graph = AdjacencyGraph::build(&table);
    assert!(graph.contains(Dimension::from_raw(0)));
    assert_eq!(graph.degree(Dimension::from_raw(0)), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(render(&table, ExportMode::Graph).unwrap(), "");
}

#[test]
fn empty_buckets_contribute_no_nodes() {
    let table = connected(8, 10.0, &[0, 4]);
    let graph = AdjacencyGraph::build(&table);
    let nodes: Vec<i64> = graph.nodes().map(|dim| dim.as_raw()).collect();
    assert_eq!(nodes, vec![0, 4]);
    assert!(!graph.contains(Dimension::from_raw(1)));
    assert_eq!(graph.degree(Dimension::from_raw(1)), 0);
    assert!(graph.neighbors(Dimension::from_raw(1)).is_none());
}

#[test]
fn empty_table_builds_empty_graph() {
    let table = connected(4, 0.75, &[]);
    let graph = AdjacencyGraph::build(&table);
    assert!(graph.is_empty());
    assert!(graph.is_symmetric());
    assert_eq!(render(&table, ExportMode::Raw).unwrap(), "");
}
