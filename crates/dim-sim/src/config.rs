use std::fs;
use std::path::{Path, PathBuf};

use dim_cluster::{DimensionFile, ExportMode, TableConfig};
use dim_core::errors::{DimError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// YAML-configurable description of a single clustering run.
///
/// Relative paths are resolved against the directory holding the
/// configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Dimension input file.
    pub input: PathBuf,
    /// Export destination; stdout when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Export mode for the text output.
    #[serde(default)]
    pub mode: ExportMode,
    /// Optional JSON run summary destination.
    #[serde(default)]
    pub summary: Option<PathBuf>,
    /// Overrides for the table parameters read from the input header.
    #[serde(default)]
    pub table: TableOverride,
}

/// Optional replacements for the header's table parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOverride {
    /// Initial table size.
    #[serde(default)]
    pub initial_size: Option<usize>,
    /// Load factor threshold.
    #[serde(default)]
    pub load_factor_threshold: Option<f64>,
}

impl PipelineConfig {
    /// Loads and resolves a configuration file.
    pub fn load(path: &Path) -> Result<Self, DimError> {
        let text = fs::read_to_string(path)
            .map_err(|err| DimError::io("read-failed", &err).with_context("path", path.display()))?;
        let mut config = Self::from_yaml(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Parses a configuration from YAML text without resolving paths.
    pub fn from_yaml(text: &str) -> Result<Self, DimError> {
        serde_yaml::from_str(text).map_err(|err| {
            DimError::Config(
                ErrorInfo::new("invalid-pipeline-config", err.to_string())
                    .with_hint("expected keys: input, output, mode, summary, table"),
            )
        })
    }

    /// Combines the input header with any configured overrides.
    pub fn table_config(&self, file: &DimensionFile) -> Result<TableConfig, DimError> {
        let header = &file.header;
        TableConfig::new(
            self.table.initial_size.unwrap_or(header.initial_table_size),
            self.table
                .load_factor_threshold
                .unwrap_or(header.threshold),
        )
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        resolve(&mut self.input);
        if let Some(output) = self.output.as_mut() {
            resolve(output);
        }
        if let Some(summary) = self.summary.as_mut() {
            resolve(summary);
        }
    }
}
