use dim_core::errors::{DimError, ErrorInfo};
use dim_core::Dimension;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::adjacency::AdjacencyGraph;
use crate::export::{render, render_graph};
use crate::flags::{ExportMode, TableConfig};
use crate::hash::{graph_hash, table_hash};
use crate::ring::{connect, ConnectedTable};
use crate::table::BucketTable;

/// Deterministic record of one insert, connect and export run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Export mode used for the text output.
    pub mode: ExportMode,
    /// Table size before any rehash.
    pub initial_size: usize,
    /// Configured load factor threshold.
    pub threshold: f64,
    /// Table size after all insertions.
    pub final_size: usize,
    /// Number of inserted dimensions.
    pub item_count: usize,
    /// Number of doublings performed.
    pub rehash_count: usize,
    /// Buckets holding at least one dimension.
    pub non_empty_buckets: usize,
    /// Ring links appended by the connection pass.
    pub ring_links: usize,
    /// Canonical hash of the connected table.
    pub table_hash: String,
    /// Number of graph nodes (graph mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,
    /// Number of hub-to-member links (graph mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_count: Option<usize>,
    /// Canonical hash of the graph (graph mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_hash: Option<String>,
}

impl RunSummary {
    /// Serializes the summary to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DimError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| DimError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
    }
}

/// Output of [`run_pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Finalized table.
    pub table: ConnectedTable,
    /// Derived graph, present in graph mode.
    pub graph: Option<AdjacencyGraph>,
    /// Rendered export text.
    pub text: String,
    /// Run statistics and hashes.
    pub summary: RunSummary,
}

/// Inserts `dims` in order, connects the ring, and renders the export.
pub fn run_pipeline<I>(
    config: TableConfig,
    dims: I,
    mode: ExportMode,
) -> Result<PipelineOutput, DimError>
where
    I: IntoIterator<Item = Dimension>,
{
    let mut table = BucketTable::new(config)?;
    table.extend(dims);
    let table = connect(table);

    let (graph, text) = match mode {
        ExportMode::Raw => (None, render(&table, mode)?),
        ExportMode::Graph => {
            let graph = AdjacencyGraph::build(&table);
            let text = render_graph(&graph)?;
            (Some(graph), text)
        }
    };

    let summary = RunSummary {
        mode,
        initial_size: config.initial_size,
        threshold: config.load_factor_threshold,
        final_size: table.table_size(),
        item_count: table.item_count(),
        rehash_count: table.rehash_count(),
        non_empty_buckets: table.buckets().iter().filter(|b| !b.is_empty()).count(),
        ring_links: table.links_added(),
        table_hash: table_hash(&table),
        node_count: graph.as_ref().map(AdjacencyGraph::node_count),
        edge_count: graph.as_ref().map(AdjacencyGraph::edge_count),
        graph_hash: graph.as_ref().map(graph_hash),
    };
    info!(
        mode = mode.label(),
        final_size = summary.final_size,
        items = summary.item_count,
        rehashes = summary.rehash_count,
        "clustering pipeline finished"
    );

    Ok(PipelineOutput {
        table,
        graph,
        text,
        summary,
    })
}
