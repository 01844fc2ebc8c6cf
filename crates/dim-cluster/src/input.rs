//! Parsers for the whitespace-separated dimension and spiderverse inputs.

use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use dim_core::errors::{DimError, ErrorInfo};
use dim_core::Dimension;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::flags::TableConfig;

/// Leading triple of a dimension file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionHeader {
    /// Number of dimension records that follow.
    pub dimension_count: usize,
    /// Table size before any rehash.
    pub initial_table_size: usize,
    /// Load factor threshold used to rehash the table.
    pub threshold: f64,
}

/// One dimension record. Only `dimension` reaches the clustering core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRecord {
    /// Dimension identifier.
    pub dimension: Dimension,
    /// Number of canon events recorded for the dimension.
    pub canon_events: i64,
    /// Dimension weight.
    pub weight: i64,
}

/// Parsed dimension file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionFile {
    /// Header triple.
    pub header: DimensionHeader,
    /// Records in file order.
    pub records: Vec<DimensionRecord>,
}

impl DimensionFile {
    /// Builds a validated table configuration from the header.
    pub fn table_config(&self) -> Result<TableConfig, DimError> {
        TableConfig::new(self.header.initial_table_size, self.header.threshold)
    }

    /// Returns the dimension stream in file order.
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.records.iter().map(|record| record.dimension)
    }
}

/// Person listed in a spiderverse file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Dimension the person currently occupies.
    pub current_dimension: Dimension,
    /// Display name (a single whitespace-free token).
    pub name: String,
    /// Dimensional signature of the person.
    pub signature: i64,
}

/// Parses a dimension file: header triple followed by `dimension_count` records.
pub fn parse_dimension_file(text: &str) -> Result<DimensionFile, DimError> {
    let mut tokens = Tokens::new(text);
    let dimension_count = tokens.count("dimension_count")?;
    let initial_table_size = tokens.table_size("initial_table_size")?;
    let threshold = tokens.float("threshold")?;
    let mut records = Vec::with_capacity(dimension_count.min(1 << 16));
    for index in 0..dimension_count {
        let record = DimensionRecord {
            dimension: Dimension::from_raw(tokens.integer("dimension")?),
            canon_events: tokens.integer("canon_events")?,
            weight: tokens.integer("weight")?,
        };
        trace!(index, dimension = %record.dimension, "parsed dimension record");
        records.push(record);
    }
    Ok(DimensionFile {
        header: DimensionHeader {
            dimension_count,
            initial_table_size,
            threshold,
        },
        records,
    })
}

/// Parses a spiderverse file: a person count followed by person records.
pub fn parse_spiderverse_file(text: &str) -> Result<Vec<Person>, DimError> {
    let mut tokens = Tokens::new(text);
    let person_count = tokens.count("person_count")?;
    let mut people = Vec::with_capacity(person_count.min(1 << 16));
    for _ in 0..person_count {
        people.push(Person {
            current_dimension: Dimension::from_raw(tokens.integer("current_dimension")?),
            name: tokens.next("name")?.to_string(),
            signature: tokens.integer("signature")?,
        });
    }
    Ok(people)
}

/// Reads and parses a dimension file from disk.
pub fn load_dimension_file(path: &Path) -> Result<DimensionFile, DimError> {
    parse_dimension_file(&read_text(path)?).map_err(|err| err.with_context("path", path.display()))
}

/// Reads and parses a spiderverse file from disk.
pub fn load_spiderverse_file(path: &Path) -> Result<Vec<Person>, DimError> {
    parse_spiderverse_file(&read_text(path)?)
        .map_err(|err| err.with_context("path", path.display()))
}

fn read_text(path: &Path) -> Result<String, DimError> {
    fs::read_to_string(path)
        .map_err(|err| DimError::io("read-failed", &err).with_context("path", path.display()))
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next(&mut self, field: &str) -> Result<&'a str, DimError> {
        let token = self.inner.next().ok_or_else(|| {
            parse_error("missing-token", "unexpected end of input")
                .with_context("field", field)
                .with_context("position", self.position)
        })?;
        self.position += 1;
        Ok(token)
    }

    fn parse<T: FromStr>(&mut self, field: &str, code: &str, expected: &str) -> Result<T, DimError> {
        let position = self.position;
        let token = self.next(field)?;
        token.parse::<T>().map_err(|_| {
            parse_error(code, format!("expected {expected}"))
                .with_context("field", field)
                .with_context("position", position)
                .with_context("token", token)
        })
    }

    fn integer(&mut self, field: &str) -> Result<i64, DimError> {
        self.parse(field, "invalid-integer", "an integer")
    }

    fn float(&mut self, field: &str) -> Result<f64, DimError> {
        self.parse(field, "invalid-float", "a number")
    }

    fn count(&mut self, field: &str) -> Result<usize, DimError> {
        let position = self.position;
        let value = self.integer(field)?;
        usize::try_from(value).map_err(|_| {
            parse_error("negative-count", "record counts must not be negative")
                .with_context("field", field)
                .with_context("position", position)
                .with_context("value", value)
        })
    }

    fn table_size(&mut self, field: &str) -> Result<usize, DimError> {
        let value = self.integer(field)?;
        usize::try_from(value)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                DimError::Config(
                    ErrorInfo::new("table-size-not-positive", "initial table size must be positive")
                        .with_context("field", field)
                        .with_context("value", value),
                )
            })
    }
}

fn parse_error(code: &str, message: impl Into<String>) -> DimError {
    DimError::Parse(ErrorInfo::new(code, message))
}
