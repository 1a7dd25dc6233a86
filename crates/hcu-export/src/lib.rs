//! Export serializer.
//!
//! Renders a validated [`hcu_core::ConfigurationState`] into the INI settings
//! file read by the simulation package. Output is deterministic apart from
//! the `# Datetime:` header line; [`serialize_at`] pins that too.

pub mod error;
pub mod options;
pub mod render;
pub mod write;

pub use error::{ExportError, Result};
pub use options::ExportOptions;
pub use render::{ConfigArtifact, DATETIME_FORMAT, serialize, serialize_at};
pub use write::write_artifact;
