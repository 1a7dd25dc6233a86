//! Session file snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hcu_core::{ConfigurationState, Session, WizardStep};

/// Current session file schema version.
///
/// The loader will reject files with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Root of a session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub schema_version: u32,

    /// RFC 3339 time of the last save.
    pub saved_at: String,

    pub user: Option<String>,

    #[serde(default)]
    pub step: WizardStep,

    /// SHA-256 of the unit table the session was configured against.
    #[serde(default)]
    pub catalog_fingerprint: Option<String>,

    pub state: ConfigurationState,
}

impl SessionFile {
    /// Snapshot a session. Staged parameter edits are not part of the
    /// snapshot.
    pub fn new(session: &Session, catalog_fingerprint: Option<String>) -> Self {
        let mut state = session.state.clone();
        state.discard_staged();
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            user: session.user.clone(),
            step: session.step,
            catalog_fingerprint,
            state,
        }
    }

    /// Update the last saved timestamp.
    pub fn touch(&mut self) {
        self.saved_at = Utc::now().to_rfc3339();
    }

    /// Parse the saved_at timestamp.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.saved_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// True when both fingerprints are known and differ.
    pub fn catalog_changed(&self, current: Option<&str>) -> bool {
        match (self.catalog_fingerprint.as_deref(), current) {
            (Some(saved), Some(current)) => saved != current,
            _ => false,
        }
    }

    /// Rebuild the live session. Enabled flags the unit does not support are
    /// cleared.
    pub fn into_session(self) -> Session {
        let mut state = self.state;
        state.reconcile_capabilities();
        Session {
            user: self.user,
            step: self.step,
            state,
        }
    }
}
