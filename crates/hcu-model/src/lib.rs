//! Data model for heave compensation unit configuration.
//!
//! Types in this crate describe what the user configures: the selected
//! [`Unit`], twenty [`ParameterSlot`]s, the [`SpecialFunctions`], the
//! [`ResultSelection`] and the [`SafetyLimits`]. Behaviour that depends on the
//! selected unit (capability gating, commits, validation) lives in the crates
//! that consume this model.

pub mod error;
pub mod parameter;
pub mod results;
pub mod special;
pub mod unit;

use serde::{Deserialize, Serialize};

pub use error::{ModelError, Result};
pub use parameter::{
    ParameterSet, ParameterSide, ParameterSlot, SLOTS_PER_SIDE, SlotBounds, SlotId,
};
pub use results::{ResultCategory, ResultMode, ResultSelection};
pub use special::{
    ActiveHeaveCompensation, CapabilitySet, ConstantTension, MotionReference, QuickLifting,
    RodLock, RodLockMode, RodLockOperation, RodOrientation, SpecialFunction,
    SpecialFunctionEntry, SpecialFunctionKind, SpecialFunctions,
};
pub use unit::{Unit, UnitCategory, UnitSpecs};

/// Safety limits applied by the simulation package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyLimits {
    /// Maximum force limit in tonnes.
    pub max_force_limit: f64,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            max_force_limit: 2000.0,
        }
    }
}
