#![deny(missing_docs)]
#![doc = "Core identifier and error types for the dimension clustering engine."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{DimError, ErrorInfo};

/// Integer identifier of a dimension.
///
/// A dimension carries no structure beyond its value: the same identifier is
/// used as the hash key when clustering and as the node id of the derived
/// adjacency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension(i64);

impl Dimension {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
