//! Result channel catalog and the user's selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Body result channels.
pub const BODY_RESULTS: [&str; 15] = [
    "Force (F_fb)",
    "Force (d_PID_CT_dt)",
    "Force (F_CT_point)",
    "Force External (F_external)",
    "Force Internal (F_internal)",
    "Force Passive (F_passive)",
    "Force Active (F_active)",
    "Force Spring (F_spring)",
    "Force Damping (F_damping)",
    "Force Friction (F_friction)",
    "Force Feedforward (F_ff)",
    "Force (F_CT)",
    "Force (Target_CT)",
    "Measured Force (F_IAHC_total_m)",
    "Measured Stroke (S_m)",
];

/// Rod result channels.
pub const ROD_RESULTS: [&str; 26] = [
    "Measured Stroke Velocity (vS_m)",
    "Measured Stroke Acc (acc_S_m)",
    "Measured velocity (v_rod_m)",
    "Measured heave (h_rod_m)",
    "Setpoint (F_sp_CT)",
    "Setpoint (F_sp_HC)",
    "Setpoint (v_rod_sp)",
    "Setpoint (h_rod_sp)",
    "Orcaflex Stroke (S_orc)",
    "Orcaflex Stroke Velocity (vS_orc)",
    "Filtered (S_m_LP)",
    "Filtered (vS_m_LP)",
    "Filtered (acc_S_m_LP)",
    "Tracking error (e_h_rod)",
    "Tracking error (e_v_payload)",
    "Tracking error (e_F_CT)",
    "Tracking error (e_v_body)",
    "S-curve (S_curve_x)",
    "S-curve (S_curve_v)",
    "S-curve (S_curve_j)",
    "S-curve (S_curve_acc)",
    "S-curve (S_curve_x_k)",
    "S-curve (S_curve_v_k)",
    "S-curve (S_curve_acc_k)",
    "F_fb_limit_lower",
    "F_fb_limit_upper",
];

/// Payload result channels.
pub const PAYLOAD_RESULTS: [&str; 15] = [
    "acc_payload_MRU",
    "acc_external_MRU",
    "acc_external_MRU_inverted",
    "acc_payload_sp",
    "acc_payload_sp_fb",
    "v_payload_sp_fb",
    "v_payload_m",
    "v_external_MRU",
    "h_external_MRU",
    "v_external_MRU_inverted",
    "h_external_MRU_inverted",
    "acc_limit_lower",
    "acc_limit_upper",
    "v_payload_limit_lower",
    "v_payload_limit_upper",
];

const DEFAULT_BODY_RESULTS: [&str; 2] = ["Force (F_fb)", "Force Active (F_active)"];
const DEFAULT_ROD_RESULTS: [&str; 2] = ["Setpoint (F_sp_CT)", "S-curve (S_curve_x)"];
const DEFAULT_PAYLOAD_RESULTS: [&str; 2] = ["v_payload_m", "acc_payload_MRU"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultCategory {
    Body,
    Rod,
    Payload,
}

impl ResultCategory {
    pub const ALL: [Self; 3] = [Self::Body, Self::Rod, Self::Payload];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Rod => "rod",
            Self::Payload => "payload",
        }
    }

    /// Full catalog for the category, in export order.
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            Self::Body => &BODY_RESULTS,
            Self::Rod => &ROD_RESULTS,
            Self::Payload => &PAYLOAD_RESULTS,
        }
    }

    /// The preselected subset.
    pub fn defaults(&self) -> &'static [&'static str] {
        match self {
            Self::Body => &DEFAULT_BODY_RESULTS,
            Self::Rod => &DEFAULT_ROD_RESULTS,
            Self::Payload => &DEFAULT_PAYLOAD_RESULTS,
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        self.catalog().contains(&option)
    }

    /// Artifact key in the `[Results]` section.
    pub fn export_key(&self) -> &'static str {
        match self {
            Self::Body => "body_results",
            Self::Rod => "rod_results",
            Self::Payload => "payload_results",
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "body" => Ok(Self::Body),
            "rod" => Ok(Self::Rod),
            "payload" => Ok(Self::Payload),
            _ => Err(ModelError::InvalidOption {
                field: "result category",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether the simulator's predefined results are used or a custom set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultMode {
    #[default]
    Defaults,
    Customized,
}

impl FromStr for ResultMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "defaults" | "default" => Ok(Self::Defaults),
            "customized" | "custom" => Ok(Self::Customized),
            _ => Err(ModelError::InvalidOption {
                field: "result mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Selected result channels per category.
///
/// Membership is unordered; [`ResultSelection::ordered`] always yields catalog
/// order. The sets survive mode changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSelection {
    pub mode: ResultMode,
    pub body: BTreeSet<String>,
    pub rod: BTreeSet<String>,
    pub payload: BTreeSet<String>,
}

impl Default for ResultSelection {
    fn default() -> Self {
        let mut selection = Self {
            mode: ResultMode::Defaults,
            body: BTreeSet::new(),
            rod: BTreeSet::new(),
            payload: BTreeSet::new(),
        };
        for category in ResultCategory::ALL {
            *selection.set_mut(category) = owned(category.defaults());
        }
        selection
    }
}

fn owned(options: &[&str]) -> BTreeSet<String> {
    options.iter().map(|option| (*option).to_string()).collect()
}

impl ResultSelection {
    pub fn set(&self, category: ResultCategory) -> &BTreeSet<String> {
        match category {
            ResultCategory::Body => &self.body,
            ResultCategory::Rod => &self.rod,
            ResultCategory::Payload => &self.payload,
        }
    }

    pub fn set_mut(&mut self, category: ResultCategory) -> &mut BTreeSet<String> {
        match category {
            ResultCategory::Body => &mut self.body,
            ResultCategory::Rod => &mut self.rod,
            ResultCategory::Payload => &mut self.payload,
        }
    }

    pub fn contains(&self, category: ResultCategory, option: &str) -> bool {
        self.set(category).contains(option)
    }

    /// Selected options of a category in catalog order.
    pub fn ordered(&self, category: ResultCategory) -> Vec<&'static str> {
        let selected = self.set(category);
        category
            .catalog()
            .iter()
            .copied()
            .filter(|option| selected.contains(*option))
            .collect()
    }

    /// `(selected, total)` for a category.
    pub fn count(&self, category: ResultCategory) -> (usize, usize) {
        (self.ordered(category).len(), category.catalog().len())
    }

    /// Nothing selected in any category.
    pub fn is_empty(&self) -> bool {
        ResultCategory::ALL
            .iter()
            .all(|category| self.set(*category).is_empty())
    }

    pub fn replace(&mut self, category: ResultCategory, options: &[&str]) {
        *self.set_mut(category) = owned(options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(ResultCategory::Body.catalog().len(), 15);
        assert_eq!(ResultCategory::Rod.catalog().len(), 26);
        assert_eq!(ResultCategory::Payload.catalog().len(), 15);
        for category in ResultCategory::ALL {
            for option in category.defaults() {
                assert!(category.contains(option), "{option} missing from {category}");
            }
        }
    }

    #[test]
    fn ordered_follows_catalog_not_insertion() {
        let mut selection = ResultSelection::default();
        selection.replace(
            ResultCategory::Payload,
            &["v_payload_limit_upper", "acc_payload_MRU", "v_payload_m"],
        );
        assert_eq!(
            selection.ordered(ResultCategory::Payload),
            vec!["acc_payload_MRU", "v_payload_m", "v_payload_limit_upper"]
        );
        assert_eq!(selection.count(ResultCategory::Payload), (3, 15));
    }
}
