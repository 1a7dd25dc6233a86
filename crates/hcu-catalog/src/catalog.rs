//! The loaded unit catalog.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hcu_model::{Unit, UnitCategory, UnitSpecs};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::hash::sha256_hex;
use crate::loader::parse_units_csv;

/// Units partitioned by category, each group in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categorized<'a> {
    pub iahc: Vec<&'a Unit>,
    pub phc: Vec<&'a Unit>,
    pub other: Vec<&'a Unit>,
}

impl<'a> Categorized<'a> {
    pub fn group(&self, category: UnitCategory) -> &[&'a Unit] {
        match category {
            UnitCategory::Iahc => &self.iahc,
            UnitCategory::Phc => &self.phc,
            UnitCategory::ShockAbsorber => &self.other,
        }
    }
}

/// Immutable set of units available for selection.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    source: Option<PathBuf>,
    fingerprint: Option<String>,
}

impl UnitCatalog {
    /// Load and sort the catalog from a CSV file.
    ///
    /// Units are ordered by type name, then unit id. A repeated unit id is
    /// rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
        let units = parse_units_csv(path, &bytes)?;
        let catalog = Self::from_units_checked(path, units)?;
        let catalog = Self {
            source: Some(path.to_path_buf()),
            fingerprint: Some(sha256_hex(&bytes)),
            ..catalog
        };
        info!(
            path = %path.display(),
            units = catalog.len(),
            "unit catalog loaded"
        );
        Ok(catalog)
    }

    /// An empty catalog, used when loading failed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from units already in memory.
    pub fn from_units(units: Vec<Unit>) -> Result<Self> {
        Self::from_units_checked(Path::new("<memory>"), units)
    }

    fn from_units_checked(path: &Path, mut units: Vec<Unit>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for unit in &units {
            if !seen.insert(unit.unit_id.as_str()) {
                return Err(CatalogError::DuplicateUnitId {
                    path: path.to_path_buf(),
                    unit_id: unit.unit_id.clone(),
                });
            }
        }
        units.sort_by(|a, b| {
            a.type_name
                .cmp(&b.type_name)
                .then_with(|| a.unit_id.cmp(&b.unit_id))
        });
        Ok(Self {
            units,
            source: None,
            fingerprint: None,
        })
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// File the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// SHA-256 of the source bytes, if loaded from a file.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Partition units by category.
    pub fn categorize(&self) -> Categorized<'_> {
        let mut groups = Categorized::default();
        for unit in &self.units {
            match unit.category {
                UnitCategory::Iahc => groups.iahc.push(unit),
                UnitCategory::Phc => groups.phc.push(unit),
                UnitCategory::ShockAbsorber => groups.other.push(unit),
            }
        }
        groups
    }

    pub fn lookup(&self, unit_id: &str) -> Result<&Unit> {
        self.units
            .iter()
            .find(|unit| unit.unit_id == unit_id)
            .ok_or_else(|| {
                debug!(unit_id, "unit lookup missed");
                CatalogError::NotFound {
                    unit_id: unit_id.to_string(),
                }
            })
    }

    pub fn lookup_specs(&self, unit_id: &str) -> Result<&UnitSpecs> {
        self.lookup(unit_id).map(|unit| &unit.specs)
    }

    /// Unit to pre-select for a fresh session: the first IAHC unit, then the
    /// first PHC unit, then anything else.
    pub fn default_unit(&self) -> Option<&Unit> {
        let groups = self.categorize();
        UnitCategory::ALL
            .into_iter()
            .find_map(|category| groups.group(category).first().copied())
    }
}
