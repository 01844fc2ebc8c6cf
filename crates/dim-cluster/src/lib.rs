#![deny(missing_docs)]
#![doc = include_str!("../docs/cluster-api.md")]

//! Chained bucket table, ring connection, and adjacency export for dimension ids.

mod adjacency;
mod export;
mod flags;
mod hash;
mod ids;
pub mod input;
mod pipeline;
mod ring;
mod table;

pub use adjacency::AdjacencyGraph;
pub use export::{export, render, render_graph, write_graph, write_raw};
pub use flags::{ExportMode, TableConfig};
pub use hash::{graph_hash, table_hash};
pub use ids::normalize_mod;
pub use input::{
    load_dimension_file, load_spiderverse_file, parse_dimension_file, parse_spiderverse_file,
    DimensionFile, DimensionHeader, DimensionRecord, Person,
};
pub use pipeline::{run_pipeline, PipelineOutput, RunSummary};
pub use ring::{connect, ring_links, ConnectedTable};
pub use table::{Bucket, BucketTable};
