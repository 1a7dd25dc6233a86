use std::path::PathBuf;
use thiserror::Error;

use hcu_validate::ValidationResult;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Export attempted on a configuration that does not validate.
    #[error("configuration is incomplete ({} issue(s))", .0.issue_count())]
    Validation(ValidationResult),

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {temp_path} into place at {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
