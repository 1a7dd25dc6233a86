//! Settings file for the CLI host.
//!
//! Every field is optional; a missing file section falls back to defaults.
//!
//! ```toml
//! [catalog]
//! path = "data/units.csv"
//! figures_dir = "figures"
//!
//! [export]
//! tool_name = "Safelink OrcaFlex Configuration Web Tool"
//! version = "0.0.1"
//! contact = "Safelink post@safelink.no"
//! filename_prefix = "safelink_orcaflex_config"
//! output_dir = "out"
//!
//! [session]
//! path = "hcu-session.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use hcu_catalog::default_catalog_path;
use hcu_export::ExportOptions;

/// Session file used when neither the command line nor the settings name one.
pub const DEFAULT_SESSION_FILE: &str = "hcu-session.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub export: ExportSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Unit table CSV. `HCU_CATALOG` and the shipped table apply when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Directory holding unit pictures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figures_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    #[serde(flatten)]
    pub header: ExportOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse settings {}", path.display()))
    }

    /// Load the given file, or the defaults when none is named.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Save settings to a TOML file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        fs::write(path, content).with_context(|| format!("write settings {}", path.display()))
    }

    /// Catalog path: command line, then settings, then `HCU_CATALOG` or the
    /// shipped table.
    pub fn catalog_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.path.clone())
            .unwrap_or_else(default_catalog_path)
    }

    /// Picture directory, defaulting to `figures/` next to the catalog file.
    pub fn figures_dir(&self, catalog_path: &Path) -> PathBuf {
        self.catalog.figures_dir.clone().unwrap_or_else(|| {
            catalog_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("figures")
        })
    }

    pub fn session_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.session.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE))
    }

    pub fn output_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.export.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
