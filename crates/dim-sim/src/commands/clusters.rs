use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use dim_cluster::{load_dimension_file, run_pipeline, ExportMode};

use crate::{write_summary, write_text};

#[derive(Args, Debug)]
pub struct ClustersArgs {
    /// Dimension file: header triple followed by dimension records.
    #[arg(long)]
    pub input: PathBuf,
    /// Output file for the connected buckets (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Optional JSON run summary destination.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

pub fn run(args: &ClustersArgs) -> Result<(), Box<dyn Error>> {
    let file = load_dimension_file(&args.input)?;
    let config = file.table_config()?;
    let output = run_pipeline(config, file.dimensions(), ExportMode::Raw)?;
    write_text(args.out.as_deref(), &output.text)?;
    write_summary(args.summary.as_deref(), &output.summary)?;
    Ok(())
}
