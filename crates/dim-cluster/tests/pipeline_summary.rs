use dim_cluster::{graph_hash, run_pipeline, table_hash, ExportMode, TableConfig};
use dim_core::Dimension;

fn dims(raw: &[i64]) -> Vec<Dimension> {
    raw.iter().copied().map(Dimension::from_raw).collect()
}

#[test]
fn raw_mode_summary() {
    let config = TableConfig::new(4, 0.75).unwrap();
    let output = run_pipeline(config, dims(&[0, 4, 8, 12]), ExportMode::Raw).unwrap();
    assert!(output.graph.is_none());
    assert_eq!(output.text, "0 8\n12 4\n");

    let summary = &output.summary;
    assert_eq!(summary.initial_size, 4);
    assert_eq!(summary.final_size, 8);
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.rehash_count, 1);
    assert_eq!(summary.non_empty_buckets, 2);
    assert_eq!(summary.ring_links, 0);
    assert_eq!(summary.table_hash, table_hash(&output.table));
    assert!(summary.graph_hash.is_none());

    let json = summary.to_json().unwrap();
    assert!(json.contains("\"mode\": \"raw\""));
    assert!(!json.contains("graph_hash"));
}

#[test]
fn graph_mode_summary() {
    let config = TableConfig::new(3, 2.0).unwrap();
    let output = run_pipeline(config, dims(&[0, 1, 2]), ExportMode::Graph).unwrap();
    let graph = output.graph.as_ref().unwrap();
    assert_eq!(output.summary.node_count, Some(3));
    assert_eq!(output.summary.edge_count, Some(6));
    assert_eq!(output.summary.graph_hash.as_deref(), Some(graph_hash(graph).as_str()));
    assert_eq!(output.text.lines().count(), 3);
}

#[test]
fn hashes_distinguish_layouts() {
    let config = TableConfig::new(4, 10.0).unwrap();
    let a = run_pipeline(config, dims(&[1, 2, 3]), ExportMode::Graph).unwrap();
    let c = run_pipeline(config, dims(&[1, 2, 3]), ExportMode::Graph).unwrap();
    assert_eq!(a.summary.table_hash, c.summary.table_hash);
    assert_eq!(a.summary.table_hash.len(), 64);
    assert_eq!(a.summary.graph_hash, c.summary.graph_hash);
    assert_ne!(
        a.summary.table_hash,
        run_pipeline(config, dims(&[1, 2, 7]), ExportMode::Graph)
            .unwrap()
            .summary
            .table_hash
    );
}

#[test]
fn invalid_config_fails_before_insertion() {
    let config = TableConfig {
        initial_size: 0,
        load_factor_threshold: 0.75,
    };
    let err = run_pipeline(config, dims(&[1]), ExportMode::Raw).unwrap_err();
    assert_eq!(err.code(), "table-size-zero");
}
