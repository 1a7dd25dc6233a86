//! Special functions: optional control modes a unit may support.
//!
//! Each function is a variant of the closed [`SpecialFunction`] sum type and
//! carries its own parameters. Whether a function can be enabled is decided by
//! the [`CapabilitySet`] of the selected unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Identifies a special function independently of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpecialFunctionKind {
    QuickLifting,
    ConstantTension,
    ActiveHeaveCompensation,
    RodLock,
    RodOrientation,
}

impl SpecialFunctionKind {
    pub const ALL: [Self; 5] = [
        Self::QuickLifting,
        Self::ConstantTension,
        Self::ActiveHeaveCompensation,
        Self::RodLock,
        Self::RodOrientation,
    ];

    /// Functions with an on/off flag, in export order.
    pub const TOGGLEABLE: [Self; 4] = [
        Self::QuickLifting,
        Self::ConstantTension,
        Self::ActiveHeaveCompensation,
        Self::RodLock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuickLifting => "quick_lifting",
            Self::ConstantTension => "constant_tension",
            Self::ActiveHeaveCompensation => "active_heave_compensation",
            Self::RodLock => "rod_lock",
            Self::RodOrientation => "rod_orientation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::QuickLifting => "Quick Lifting",
            Self::ConstantTension => "Constant Tension",
            Self::ActiveHeaveCompensation => "Active Heave Compensation",
            Self::RodLock => "Rod Lock",
            Self::RodOrientation => "Rod Orientation",
        }
    }

    /// Rod orientation is a setting that applies whenever supported; the
    /// others are switched on and off by the user.
    pub fn is_toggleable(&self) -> bool {
        !matches!(self, Self::RodOrientation)
    }
}

impl fmt::Display for SpecialFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SpecialFunctionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "quick_lifting" | "quicklifting" => Ok(Self::QuickLifting),
            "constant_tension" | "constanttension" => Ok(Self::ConstantTension),
            "active_heave_compensation" | "activeheavecompensation" | "ahc" => {
                Ok(Self::ActiveHeaveCompensation)
            }
            "rod_lock" | "rodlock" => Ok(Self::RodLock),
            "rod_orientation" | "rodorientation" => Ok(Self::RodOrientation),
            _ => Err(ModelError::InvalidOption {
                field: "special function",
                value: s.to_string(),
            }),
        }
    }
}

/// Special functions a unit category supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub ahc: bool,
    pub quick_lifting: bool,
    pub constant_tension: bool,
    pub rod_lock: bool,
    pub rod_orientation: bool,
}

impl CapabilitySet {
    /// Default-deny set: nothing supported.
    pub const fn none() -> Self {
        Self {
            ahc: false,
            quick_lifting: false,
            constant_tension: false,
            rod_lock: false,
            rod_orientation: false,
        }
    }

    pub fn supports(&self, kind: SpecialFunctionKind) -> bool {
        match kind {
            SpecialFunctionKind::QuickLifting => self.quick_lifting,
            SpecialFunctionKind::ConstantTension => self.constant_tension,
            SpecialFunctionKind::ActiveHeaveCompensation => self.ahc,
            SpecialFunctionKind::RodLock => self.rod_lock,
            SpecialFunctionKind::RodOrientation => self.rod_orientation,
        }
    }

    pub fn any(&self) -> bool {
        SpecialFunctionKind::ALL
            .iter()
            .any(|kind| self.supports(*kind))
    }

    /// Supported kinds in canonical order.
    pub fn supported(&self) -> Vec<SpecialFunctionKind> {
        SpecialFunctionKind::ALL
            .into_iter()
            .filter(|kind| self.supports(*kind))
            .collect()
    }
}

/// Quick lifting mode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickLifting {
    /// Start time in seconds.
    pub start_time: f64,
    /// Maximum acceleration in m/s².
    pub acceleration_limit: f64,
}

impl Default for QuickLifting {
    fn default() -> Self {
        Self {
            start_time: 10.0,
            acceleration_limit: 0.8,
        }
    }
}

/// Constant tension mode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantTension {
    /// Start time in seconds.
    pub start_time: f64,
    /// Tension tolerance in tonnes.
    pub tolerance: f64,
}

impl Default for ConstantTension {
    fn default() -> Self {
        Self {
            start_time: 5.0,
            tolerance: 5.0,
        }
    }
}

/// Motion reference unit source for active heave compensation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionReference {
    #[default]
    Onboard,
    External,
}

impl MotionReference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onboard => "Onboard",
            Self::External => "External",
        }
    }
}

impl FromStr for MotionReference {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "onboard" => Ok(Self::Onboard),
            "external" => Ok(Self::External),
            _ => Err(ModelError::InvalidOption {
                field: "motion_reference",
                value: s.to_string(),
            }),
        }
    }
}

/// Active heave compensation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveHeaveCompensation {
    /// Start time in seconds.
    pub start_time: f64,
    /// Maximum stroke speed in m/s.
    pub max_stroke_speed: f64,
    pub motion_reference: MotionReference,
}

impl Default for ActiveHeaveCompensation {
    fn default() -> Self {
        Self {
            start_time: 15.0,
            max_stroke_speed: 2.0,
            motion_reference: MotionReference::Onboard,
        }
    }
}

/// Lifting direction during which the rod lock operates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RodLockOperation {
    #[default]
    LiftingDown,
    LiftingUp,
    Both,
}

impl RodLockOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LiftingDown => "Lifting Down",
            Self::LiftingUp => "Lifting Up",
            Self::Both => "Both Directions",
        }
    }
}

impl FromStr for RodLockOperation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "liftingdown" | "down" => Ok(Self::LiftingDown),
            "liftingup" | "up" => Ok(Self::LiftingUp),
            "both" | "bothdirections" => Ok(Self::Both),
            _ => Err(ModelError::InvalidOption {
                field: "rod_lock_operation",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether the rod locks or unlocks at the configured depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RodLockMode {
    #[default]
    AutoLock,
    AutoUnlock,
}

impl RodLockMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoLock => "Auto Lock at Depth",
            Self::AutoUnlock => "Auto Unlock at Depth",
        }
    }
}

impl FromStr for RodLockMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "autolock" | "autolockatdepth" | "lock" => Ok(Self::AutoLock),
            "autounlock" | "autounlockatdepth" | "unlock" => Ok(Self::AutoUnlock),
            _ => Err(ModelError::InvalidOption {
                field: "rod_lock_mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Rod lock parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RodLock {
    /// Lock/unlock depth in metres.
    pub depth: f64,
    pub operation: RodLockOperation,
    pub mode: RodLockMode,
    /// Hold time in seconds.
    pub hold_time: f64,
    /// Lock speed in m/s.
    pub speed: f64,
}

impl Default for RodLock {
    fn default() -> Self {
        Self {
            depth: 10.0,
            operation: RodLockOperation::LiftingDown,
            mode: RodLockMode::AutoLock,
            hold_time: 5.0,
            speed: 0.5,
        }
    }
}

/// Physical orientation of the unit during lifting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RodOrientation {
    #[default]
    RodDown,
    RodUp,
}

impl RodOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RodDown => "Rod Down (Standard)",
            Self::RodUp => "Rod Up (Inverted)",
        }
    }
}

impl FromStr for RodOrientation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "roddown" | "down" | "roddownstandard" | "standard" => Ok(Self::RodDown),
            "rodup" | "up" | "rodupinverted" | "inverted" => Ok(Self::RodUp),
            _ => Err(ModelError::InvalidOption {
                field: "rod_orientation",
                value: s.to_string(),
            }),
        }
    }
}

fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// A special function together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum SpecialFunction {
    QuickLifting(QuickLifting),
    ConstantTension(ConstantTension),
    ActiveHeaveCompensation(ActiveHeaveCompensation),
    RodLock(RodLock),
    RodOrientation(RodOrientation),
}

impl SpecialFunction {
    pub fn kind(&self) -> SpecialFunctionKind {
        match self {
            Self::QuickLifting(_) => SpecialFunctionKind::QuickLifting,
            Self::ConstantTension(_) => SpecialFunctionKind::ConstantTension,
            Self::ActiveHeaveCompensation(_) => SpecialFunctionKind::ActiveHeaveCompensation,
            Self::RodLock(_) => SpecialFunctionKind::RodLock,
            Self::RodOrientation(_) => SpecialFunctionKind::RodOrientation,
        }
    }

    /// Default parameters for a kind.
    pub fn default_for(kind: SpecialFunctionKind) -> Self {
        match kind {
            SpecialFunctionKind::QuickLifting => Self::QuickLifting(QuickLifting::default()),
            SpecialFunctionKind::ConstantTension => {
                Self::ConstantTension(ConstantTension::default())
            }
            SpecialFunctionKind::ActiveHeaveCompensation => {
                Self::ActiveHeaveCompensation(ActiveHeaveCompensation::default())
            }
            SpecialFunctionKind::RodLock => Self::RodLock(RodLock::default()),
            SpecialFunctionKind::RodOrientation => {
                Self::RodOrientation(RodOrientation::default())
            }
        }
    }
}

/// One special function slot: its parameters and the user's on/off choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialFunctionEntry {
    pub enabled: bool,
    pub config: SpecialFunction,
}

/// All five special functions, one entry per kind in canonical order.
///
/// This type stores raw flags; capability gating is applied by the
/// configuration state that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<SpecialFunctionEntry>",
    into = "Vec<SpecialFunctionEntry>"
)]
pub struct SpecialFunctions {
    entries: Vec<SpecialFunctionEntry>,
}

impl From<Vec<SpecialFunctionEntry>> for SpecialFunctions {
    /// Overlays stored entries onto the defaults so every kind is present
    /// exactly once, whatever the stored list contains.
    fn from(stored: Vec<SpecialFunctionEntry>) -> Self {
        let mut functions = Self::default();
        for entry in stored {
            let index = Self::position(entry.config.kind());
            functions.entries[index] = entry;
        }
        functions
    }
}

impl From<SpecialFunctions> for Vec<SpecialFunctionEntry> {
    fn from(functions: SpecialFunctions) -> Self {
        functions.entries
    }
}

impl Default for SpecialFunctions {
    fn default() -> Self {
        Self {
            entries: SpecialFunctionKind::ALL
                .into_iter()
                .map(|kind| SpecialFunctionEntry {
                    enabled: false,
                    config: SpecialFunction::default_for(kind),
                })
                .collect(),
        }
    }
}

impl SpecialFunctions {
    fn position(kind: SpecialFunctionKind) -> usize {
        SpecialFunctionKind::ALL
            .iter()
            .position(|candidate| *candidate == kind)
            .unwrap_or_default()
    }

    pub fn entry(&self, kind: SpecialFunctionKind) -> &SpecialFunctionEntry {
        &self.entries[Self::position(kind)]
    }

    pub fn is_enabled(&self, kind: SpecialFunctionKind) -> bool {
        self.entry(kind).enabled
    }

    pub fn set_enabled(&mut self, kind: SpecialFunctionKind, enabled: bool) {
        self.entries[Self::position(kind)].enabled = enabled;
    }

    /// Replace the parameters of the config's kind; the enabled flag is kept.
    pub fn set_config(&mut self, config: SpecialFunction) {
        self.entries[Self::position(config.kind())].config = config;
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpecialFunctionEntry> {
        self.entries.iter()
    }

    pub fn quick_lifting(&self) -> QuickLifting {
        match self.entry(SpecialFunctionKind::QuickLifting).config {
            SpecialFunction::QuickLifting(params) => params,
            _ => QuickLifting::default(),
        }
    }

    pub fn constant_tension(&self) -> ConstantTension {
        match self.entry(SpecialFunctionKind::ConstantTension).config {
            SpecialFunction::ConstantTension(params) => params,
            _ => ConstantTension::default(),
        }
    }

    pub fn active_heave_compensation(&self) -> ActiveHeaveCompensation {
        match self.entry(SpecialFunctionKind::ActiveHeaveCompensation).config {
            SpecialFunction::ActiveHeaveCompensation(params) => params,
            _ => ActiveHeaveCompensation::default(),
        }
    }

    pub fn rod_lock(&self) -> RodLock {
        match self.entry(SpecialFunctionKind::RodLock).config {
            SpecialFunction::RodLock(params) => params,
            _ => RodLock::default(),
        }
    }

    pub fn rod_orientation(&self) -> RodOrientation {
        match self.entry(SpecialFunctionKind::RodOrientation).config {
            SpecialFunction::RodOrientation(orientation) => orientation,
            _ => RodOrientation::default(),
        }
    }
}
