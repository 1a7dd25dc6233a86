//! Header identity and file naming for exported artifacts.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOOL_NAME: &str = "Safelink OrcaFlex Configuration Web Tool";
pub const DEFAULT_VERSION: &str = "0.0.1";
pub const DEFAULT_CONTACT: &str = "Safelink post@safelink.no";
pub const DEFAULT_FILENAME_PREFIX: &str = "safelink_orcaflex_config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Written after `# Generated by`.
    pub tool_name: String,
    pub version: String,
    /// Written between `# Contact` and `if any questions.`.
    pub contact: String,
    pub filename_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
        }
    }
}

impl ExportOptions {
    /// `<prefix>_<unit_id>.ini`. Characters that could form a path are
    /// replaced with `_`.
    pub fn filename(&self, unit_id: &str) -> String {
        let safe: String = unit_id
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_{}.ini", self.filename_prefix, safe)
    }
}
