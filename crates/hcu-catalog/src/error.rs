//! Error types for catalog loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the unit catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file missing or unreadable.
    #[error("failed to read unit catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse unit catalog {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("unit catalog {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A cell could not be read as the expected type.
    #[error("invalid {column} value '{value}' on row {row} of {path}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("duplicate unit id '{unit_id}' in {path}")]
    DuplicateUnitId { path: PathBuf, unit_id: String },

    /// Lookup of a unit id that the catalog does not contain.
    #[error("unit '{unit_id}' not found in catalog")]
    NotFound { unit_id: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the catalog source itself, as opposed to a
    /// lookup miss. Callers render an empty catalog with a diagnostic.
    pub fn is_data_load(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
