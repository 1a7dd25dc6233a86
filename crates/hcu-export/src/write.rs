//! Writing artifacts to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::render::ConfigArtifact;

/// Write an artifact into `dir`, creating the directory if needed.
///
/// The bytes go to a temporary file in `dir` that is persisted over the
/// target, so an existing artifact is either fully replaced or left untouched.
pub fn write_artifact(dir: &Path, artifact: &ConfigArtifact) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ExportError::io("create directory", dir, e))?;

    let path = dir.join(&artifact.filename);
    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{}.", artifact.filename))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ExportError::io("create temporary file in", dir, e))?;
    temp.write_all(&artifact.bytes)
        .map_err(|e| ExportError::io("write", temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| ExportError::io("sync", temp.path(), e))?;

    temp.persist(&path).map_err(|e| ExportError::AtomicWriteFailed {
        temp_path: e.file.path().to_path_buf(),
        target_path: path.clone(),
        source: e.error,
    })?;

    tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "configuration written");
    Ok(path)
}
