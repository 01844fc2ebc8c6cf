use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use dim_cluster::{load_dimension_file, run_pipeline};
use tracing::info;

use crate::config::PipelineConfig;
use crate::{write_summary, write_text};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML configuration describing inputs, mode, and outputs.
    #[arg(long)]
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config = PipelineConfig::load(&args.config)?;
    let file = load_dimension_file(&config.input)?;
    let table_config = config.table_config(&file)?;
    info!(
        mode = config.mode.label(),
        initial_size = table_config.initial_size,
        threshold = table_config.load_factor_threshold,
        "starting configured run"
    );
    let output = run_pipeline(table_config, file.dimensions(), config.mode)?;
    write_text(config.output.as_deref(), &output.text)?;
    write_summary(config.summary.as_deref(), &output.summary)?;
    Ok(())
}
