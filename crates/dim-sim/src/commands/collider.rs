use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use dim_cluster::{load_dimension_file, load_spiderverse_file, run_pipeline, ExportMode};
use tracing::{info, warn};

use crate::{write_summary, write_text};

#[derive(Args, Debug)]
pub struct ColliderArgs {
    /// Dimension file: header triple followed by dimension records.
    #[arg(long)]
    pub input: PathBuf,
    /// Spiderverse file listing people and their current dimensions.
    #[arg(long)]
    pub spiderverse: PathBuf,
    /// Output file for the adjacency list (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Optional JSON run summary destination.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

pub fn run(args: &ColliderArgs) -> Result<(), Box<dyn Error>> {
    let file = load_dimension_file(&args.input)?;
    let config = file.table_config()?;
    let output = run_pipeline(config, file.dimensions(), ExportMode::Graph)?;

    let people = load_spiderverse_file(&args.spiderverse)?;
    if let Some(graph) = output.graph.as_ref() {
        let stranded = people
            .iter()
            .filter(|person| !graph.contains(person.current_dimension))
            .count();
        if stranded > 0 {
            warn!(stranded, "people located in dimensions outside the graph");
        }
    }
    info!(people = people.len(), "read spiderverse roster");

    write_text(args.out.as_deref(), &output.text)?;
    write_summary(args.summary.as_deref(), &output.summary)?;
    Ok(())
}
