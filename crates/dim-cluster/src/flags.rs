use dim_core::errors::{DimError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`BucketTable`](crate::BucketTable).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of buckets allocated before any rehash.
    pub initial_size: usize,
    /// Load factor at or above which the table doubles.
    ///
    /// Values of `1.0` or more are accepted; the table then grows only once
    /// the average chain length reaches the threshold.
    pub load_factor_threshold: f64,
}

impl TableConfig {
    /// Creates a validated configuration.
    pub fn new(initial_size: usize, load_factor_threshold: f64) -> Result<Self, DimError> {
        let config = Self {
            initial_size,
            load_factor_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can back a table.
    pub fn validate(&self) -> Result<(), DimError> {
        if self.initial_size == 0 {
            return Err(config_error("table-size-zero", "initial table size must be positive")
                .with_context("initial_size", self.initial_size));
        }
        if !self.load_factor_threshold.is_finite() {
            return Err(config_error(
                "threshold-not-finite",
                "load factor threshold must be a finite number",
            )
            .with_context("threshold", self.load_factor_threshold));
        }
        if self.load_factor_threshold <= 0.0 {
            return Err(DimError::Config(
                ErrorInfo::new(
                    "threshold-not-positive",
                    "load factor threshold must be positive",
                )
                .with_context("threshold", self.load_factor_threshold)
                .with_hint("a threshold of 0 or below would rehash on every insertion"),
            ));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_size: 16,
            load_factor_threshold: 0.75,
        }
    }
}

/// Selects how a connected table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// One line per non-empty bucket, elements front to back.
    #[default]
    Raw,
    /// One line per graph node with its neighbour list.
    Graph,
}

impl ExportMode {
    /// Returns the stable lower-case label of the mode.
    pub fn label(&self) -> &'static str {
        match self {
            ExportMode::Raw => "raw",
            ExportMode::Graph => "graph",
        }
    }
}

fn config_error(code: &str, message: &str) -> DimError {
    DimError::Config(ErrorInfo::new(code, message))
}
