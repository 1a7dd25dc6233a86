//! Physical units and their catalog specifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Unit category. Determines the capability set of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    /// Integrated active heave compensator.
    #[serde(rename = "IAHC")]
    Iahc,
    /// Passive heave compensator (catalogued under the "Poseidon" type names).
    #[serde(rename = "PHC")]
    Phc,
    /// Shock absorber and any unit not matching the other two categories.
    #[serde(rename = "ShockAbsorber")]
    ShockAbsorber,
}

impl UnitCategory {
    pub const ALL: [Self; 3] = [Self::Iahc, Self::Phc, Self::ShockAbsorber];

    /// Substring that marks an IAHC unit in the catalog type name.
    pub const IAHC_MARKER: &'static str = "IAHC";

    /// Legacy internal label used for PHC units in the catalog type name.
    pub const PHC_MARKER: &'static str = "Poseidon";

    /// Key written to the exported artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iahc => "IAHC",
            Self::Phc => "PHC",
            Self::ShockAbsorber => "ShockAbsorber",
        }
    }

    /// Label shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Iahc => "IAHC",
            Self::Phc => "PHC",
            Self::ShockAbsorber => "Shock absorber",
        }
    }

    /// Derive the category from a catalog type name.
    ///
    /// Matching is a case-insensitive substring test: `IAHC` first, then the
    /// legacy `Poseidon` label for PHC. Everything else is a shock absorber.
    pub fn from_type_name(type_name: &str) -> Self {
        let upper = type_name.to_uppercase();
        if upper.contains(&Self::IAHC_MARKER.to_uppercase()) {
            Self::Iahc
        } else if upper.contains(&Self::PHC_MARKER.to_uppercase()) {
            Self::Phc
        } else {
            Self::ShockAbsorber
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for UnitCategory {
    type Err = ModelError;

    /// Parses both the export key (`ShockAbsorber`) and the display label
    /// (`Shock absorber`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "IAHC" => Ok(Self::Iahc),
            "PHC" => Ok(Self::Phc),
            "SHOCKABSORBER" => Ok(Self::ShockAbsorber),
            _ => Err(ModelError::UnknownCategory {
                label: s.to_string(),
            }),
        }
    }
}

/// Technical specifications of a unit as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpecs {
    /// Stroke length in metres.
    pub stroke: f64,
    /// Overall size, free text (L/W/H in metres).
    pub overall_size: String,
    /// Design pressure in bar.
    pub design_pressure: f64,
    /// Design water depth in metres.
    pub design_water_depth: f64,
    /// Gas volume in m³ at atmospheric pressure.
    pub gas_volume: f64,
    /// Dry weight in kilograms.
    pub weight: f64,
    /// Safe working load in tonnes.
    pub swl: f64,
}

impl UnitSpecs {
    /// Weight converted to tonnes.
    pub fn weight_tonnes(&self) -> f64 {
        self.weight / 1000.0
    }

    /// Labelled, unit-suffixed values for a spec sheet.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Stroke", format!("{} m", self.stroke)),
            ("Overall Size (L/W/H)", self.overall_size.clone()),
            ("Design Pressure", format!("{} bar", self.design_pressure)),
            ("Design Water Depth", format!("{} m", self.design_water_depth)),
            ("Gas Volume", format!("{} m³", self.gas_volume)),
            ("Weight", format!("{:.1} tonnes", self.weight_tonnes())),
            ("SWL", format!("{:.1} Te", self.swl)),
        ]
    }
}

/// A physical unit from the catalog. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub category: UnitCategory,
    pub type_name: String,
    pub unit_id: String,
    pub specs: UnitSpecs,
}

impl Unit {
    /// Builds a unit, deriving the category from the type name.
    pub fn new(type_name: impl Into<String>, unit_id: impl Into<String>, specs: UnitSpecs) -> Self {
        let type_name = type_name.into();
        Self {
            category: UnitCategory::from_type_name(&type_name),
            type_name,
            unit_id: unit_id.into(),
            specs,
        }
    }
}
