//! Capability resolution: which special functions a unit category supports.

use hcu_model::{CapabilitySet, UnitCategory};

/// Capabilities of a unit category.
///
/// | category       | ahc | quick | tension | rod lock | orientation |
/// |----------------|-----|-------|---------|----------|-------------|
/// | IAHC           | yes | yes   | yes     | yes      | yes         |
/// | PHC            | no  | yes   | yes     | yes      | yes         |
/// | Shock absorber | no  | yes   | no      | yes      | yes         |
pub fn resolve(category: UnitCategory) -> CapabilitySet {
    match category {
        UnitCategory::Iahc => CapabilitySet {
            ahc: true,
            quick_lifting: true,
            constant_tension: true,
            rod_lock: true,
            rod_orientation: true,
        },
        UnitCategory::Phc => CapabilitySet {
            ahc: false,
            quick_lifting: true,
            constant_tension: true,
            rod_lock: true,
            rod_orientation: true,
        },
        UnitCategory::ShockAbsorber => CapabilitySet {
            ahc: false,
            quick_lifting: true,
            constant_tension: false,
            rod_lock: true,
            rod_orientation: true,
        },
    }
}

/// Resolve from a category label. Unrecognized labels get no capabilities.
pub fn resolve_label(label: &str) -> CapabilitySet {
    label
        .parse::<UnitCategory>()
        .map_or(CapabilitySet::none(), resolve)
}

/// Capabilities of an optional category; no unit means no capabilities.
pub fn resolve_optional(category: Option<UnitCategory>) -> CapabilitySet {
    category.map_or(CapabilitySet::none(), resolve)
}
