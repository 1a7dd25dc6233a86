//! Numeric unit-side and payload-side parameter slots.
//!
//! Every slot holds a committed value and, while the user is typing, a staged
//! one. Only committed values are validated and exported.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// Number of slots on each side.
pub const SLOTS_PER_SIDE: usize = 10;

/// Which side of the lift a parameter describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSide {
    Unit,
    Payload,
}

impl ParameterSide {
    pub const ALL: [Self; 2] = [Self::Unit, Self::Payload];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Payload => "payload",
        }
    }

    /// Artifact section holding this side's values.
    pub fn section(&self) -> &'static str {
        match self {
            Self::Unit => "Unit_Parameters",
            Self::Payload => "Payload_Parameters",
        }
    }

    /// Default display names and units of measure, in slot order.
    pub fn default_slots(&self) -> [(&'static str, &'static str); SLOTS_PER_SIDE] {
        match self {
            Self::Unit => UNIT_DEFAULT_SLOTS,
            Self::Payload => PAYLOAD_DEFAULT_SLOTS,
        }
    }
}

impl fmt::Display for ParameterSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const UNIT_DEFAULT_SLOTS: [(&str, &str); SLOTS_PER_SIDE] = [
    ("Equilibrium stroke position", "m"),
    ("Force parameter", "Te"),
    ("Mass parameter", "m"),
    ("Force parameter 2", "Te"),
    ("Cross-sectional area", "m²"),
    ("Gas volume", "m³"),
    ("Length parameter 1", "m"),
    ("Length parameter 2", "m"),
    ("Length parameter 3", "m"),
    ("Length parameter 4", "m"),
];

const PAYLOAD_DEFAULT_SLOTS: [(&str, &str); SLOTS_PER_SIDE] = [
    ("Available lifting height", "m"),
    ("Payload weight in air", "Te"),
    ("Sling weight", "Te"),
    ("Parameter 4", "Te"),
    ("Cross-sectional area", "m²"),
    ("Volume parameter", "m³"),
    ("Length parameter 1", "m"),
    ("Length parameter 2", "m"),
    ("Length parameter 3", "m"),
    ("Length parameter 4", "m"),
];

/// Stable address of a slot: side plus 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId {
    side: ParameterSide,
    number: usize,
}

impl SlotId {
    /// `number` is 1-based, as in the exported `parameter_<n>` keys.
    pub fn new(side: ParameterSide, number: usize) -> Result<Self> {
        if (1..=SLOTS_PER_SIDE).contains(&number) {
            Ok(Self { side, number })
        } else {
            Err(ModelError::InvalidSlotNumber {
                number,
                max: SLOTS_PER_SIDE,
            })
        }
    }

    pub fn unit(number: usize) -> Result<Self> {
        Self::new(ParameterSide::Unit, number)
    }

    pub fn payload(number: usize) -> Result<Self> {
        Self::new(ParameterSide::Payload, number)
    }

    pub fn side(&self) -> ParameterSide {
        self.side
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Artifact key, e.g. `parameter_3`.
    pub fn key(&self) -> String {
        format!("parameter_{}", self.number)
    }

    /// All slots of one side in order.
    pub fn all(side: ParameterSide) -> impl Iterator<Item = SlotId> {
        (1..=SLOTS_PER_SIDE).map(move |number| SlotId { side, number })
    }

    fn index(&self) -> usize {
        self.number - 1
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.side, self.key())
    }
}

/// Input bounds advertised to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SlotBounds {
    pub fn for_slot(id: SlotId) -> Self {
        let max = if id.number() == 2 { 1000.0 } else { 10.0 };
        Self {
            min: 0.0,
            max,
            step: 0.1,
        }
    }
}

/// A named numeric field with a committed and a staged value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSlot {
    pub name: String,
    pub unit_of_measure: String,
    value: f64,
    #[serde(skip)]
    staged: Option<f64>,
}

impl ParameterSlot {
    pub fn new(name: impl Into<String>, unit_of_measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_of_measure: unit_of_measure.into(),
            value: 0.0,
            staged: None,
        }
    }

    /// The committed value seen by validation and export.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The in-progress edit, if any.
    pub fn staged(&self) -> Option<f64> {
        self.staged
    }

    /// What an input widget should display: the edit if present, else the
    /// committed value.
    pub fn display_value(&self) -> f64 {
        self.staged.unwrap_or(self.value)
    }

    pub fn stage(&mut self, value: f64) {
        self.staged = Some(value);
    }

    /// Promote the staged value. Returns the committed value when something
    /// was staged.
    pub fn commit(&mut self) -> Option<f64> {
        let staged = self.staged.take()?;
        self.value = staged;
        Some(staged)
    }

    /// Zero is the "not yet configured" sentinel.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// `Name [unit]` label.
    pub fn label(&self) -> String {
        format!("{} [{}]", self.name, self.unit_of_measure)
    }
}

/// Ten slots for the unit and ten for the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameterSet")]
pub struct ParameterSet {
    unit: Vec<ParameterSlot>,
    payload: Vec<ParameterSlot>,
}

/// Serialized form, checked for slot count before it becomes a set.
#[derive(Deserialize)]
struct RawParameterSet {
    unit: Vec<ParameterSlot>,
    payload: Vec<ParameterSlot>,
}

impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = ModelError;

    fn try_from(raw: RawParameterSet) -> Result<Self> {
        for (side, slots) in [
            (ParameterSide::Unit, &raw.unit),
            (ParameterSide::Payload, &raw.payload),
        ] {
            if slots.len() != SLOTS_PER_SIDE {
                return Err(ModelError::SlotCount {
                    side,
                    expected: SLOTS_PER_SIDE,
                    actual: slots.len(),
                });
            }
        }
        Ok(Self {
            unit: raw.unit,
            payload: raw.payload,
        })
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            unit: default_slots(ParameterSide::Unit),
            payload: default_slots(ParameterSide::Payload),
        }
    }
}

fn default_slots(side: ParameterSide) -> Vec<ParameterSlot> {
    side.default_slots()
        .iter()
        .map(|(name, unit)| ParameterSlot::new(*name, *unit))
        .collect()
}

impl ParameterSet {
    pub fn side(&self, side: ParameterSide) -> &[ParameterSlot] {
        match side {
            ParameterSide::Unit => &self.unit,
            ParameterSide::Payload => &self.payload,
        }
    }

    fn side_mut(&mut self, side: ParameterSide) -> &mut Vec<ParameterSlot> {
        match side {
            ParameterSide::Unit => &mut self.unit,
            ParameterSide::Payload => &mut self.payload,
        }
    }

    pub fn slot(&self, id: SlotId) -> Option<&ParameterSlot> {
        self.side(id.side()).get(id.index())
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut ParameterSlot> {
        self.side_mut(id.side()).get_mut(id.index())
    }

    /// Slot ids paired with their slots, one side.
    pub fn iter_side(
        &self,
        side: ParameterSide,
    ) -> impl Iterator<Item = (SlotId, &ParameterSlot)> {
        SlotId::all(side).zip(self.side(side).iter())
    }

    /// Replace the display names of one side. Values are untouched.
    pub fn set_names(&mut self, side: ParameterSide, names: &[String]) -> Result<()> {
        if names.len() != SLOTS_PER_SIDE {
            return Err(ModelError::NameListLength {
                side,
                expected: SLOTS_PER_SIDE,
                actual: names.len(),
            });
        }
        for (slot, name) in self.side_mut(side).iter_mut().zip(names) {
            slot.name = name.clone();
        }
        Ok(())
    }

    /// Both sides hold exactly [`SLOTS_PER_SIDE`] slots.
    pub fn is_complete(&self) -> bool {
        self.unit.len() == SLOTS_PER_SIDE && self.payload.len() == SLOTS_PER_SIDE
    }

    /// Discard staged edits that were never committed.
    pub fn discard_staged(&mut self) {
        for slot in self.unit.iter_mut().chain(self.payload.iter_mut()) {
            slot.staged = None;
        }
    }
}
