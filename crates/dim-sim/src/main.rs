use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    clusters::{self, ClustersArgs},
    collider::{self, ColliderArgs},
    run::{self, RunArgs},
};
use dim_cluster::RunSummary;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(name = "dim-sim", about = "Dimension clustering and collider CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cluster a dimension file and print the connected buckets.
    Clusters(ClustersArgs),
    /// Cluster a dimension file and print the derived adjacency list.
    Collider(ColliderArgs),
    /// Execute a run described by a YAML configuration file.
    Run(RunArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Clusters(args) => clusters::run(&args),
        Command::Collider(args) => collider::run(&args),
        Command::Run(args) => run::run(&args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Writes export text to `out`, or to stdout when no path is given.
pub(crate) fn write_text(out: Option<&Path>, text: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Writes the JSON run summary when a destination is configured.
pub(crate) fn write_summary(
    out: Option<&Path>,
    summary: &RunSummary,
) -> Result<(), Box<dyn Error>> {
    if let Some(path) = out {
        fs::write(path, summary.to_json()?)?;
    }
    Ok(())
}
