//! Saving and loading session files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, SessionFile};

/// Save a session file as pretty JSON.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written session behind.
pub fn save_session(path: &Path, session: &mut SessionFile) -> Result<()> {
    session.touch();

    let bytes = serde_json::to_vec_pretty(session)
        .map_err(|source| PersistenceError::Serialization { source })?;

    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved session to {}", path.display());
    Ok(())
}

#[derive(Deserialize)]
struct VersionProbe {
    schema_version: u32,
}

/// Load a session file, rejecting files from a newer schema.
pub fn load_session(path: &Path) -> Result<SessionFile> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let probe: VersionProbe =
        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;
    if probe.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: probe.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    let session: SessionFile =
        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("Loaded session from {}", path.display());
    Ok(session)
}

/// Load a session file if it exists.
pub fn load_session_if_exists(path: &Path) -> Result<Option<SessionFile>> {
    if !path.exists() {
        return Ok(None);
    }
    load_session(path).map(Some)
}
