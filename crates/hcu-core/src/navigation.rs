//! Wizard steps and their order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use hcu_model::ModelError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Home,
    Unit,
    Results,
    Export,
    Help,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Unit,
        Self::Results,
        Self::Export,
        Self::Help,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Unit => "Unit Configuration",
            Self::Results => "Results Configuration",
            Self::Export => "Export",
            Self::Help => "Help",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Home => Some(Self::Unit),
            Self::Unit => Some(Self::Results),
            Self::Results => Some(Self::Export),
            Self::Export => Some(Self::Help),
            Self::Help => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Home => None,
            Self::Unit => Some(Self::Home),
            Self::Results => Some(Self::Unit),
            Self::Export => Some(Self::Results),
            Self::Help => Some(Self::Export),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WizardStep {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "unit" => Ok(Self::Unit),
            "results" => Ok(Self::Results),
            "export" => Ok(Self::Export),
            "help" => Ok(Self::Help),
            _ => Err(ModelError::InvalidOption {
                field: "wizard step",
                value: s.to_string(),
            }),
        }
    }
}
