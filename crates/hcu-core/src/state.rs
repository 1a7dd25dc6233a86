//! The mutable record of all user choices.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use hcu_model::{
    CapabilitySet, ParameterSet, ParameterSide, ResultSelection, SafetyLimits, SlotId,
    SpecialFunction, SpecialFunctionKind, SpecialFunctions, Unit,
};

use crate::capability;
use crate::error::{Result, StateError};
use crate::results::ResultSelector;

/// Everything the user has configured in one session.
///
/// Validation and export only ever read this; all mutation goes through the
/// methods below so that capability gating and the staged/committed contract
/// hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationState {
    unit: Option<Unit>,
    parameters: ParameterSet,
    functions: SpecialFunctions,
    results: ResultSelection,
    safety: SafetyLimits,
}

impl ConfigurationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn functions(&self) -> &SpecialFunctions {
        &self.functions
    }

    pub fn results(&self) -> &ResultSelection {
        &self.results
    }

    pub fn safety(&self) -> SafetyLimits {
        self.safety
    }

    /// Capabilities of the selected unit, resolved on every call.
    pub fn capabilities(&self) -> CapabilitySet {
        capability::resolve_optional(self.unit.as_ref().map(|unit| unit.category))
    }

    /// Whether a special function is both enabled and supported. Rod
    /// orientation counts as active whenever it is supported.
    pub fn is_function_active(&self, kind: SpecialFunctionKind) -> bool {
        let supported = self.capabilities().supports(kind);
        if kind.is_toggleable() {
            supported && self.functions.is_enabled(kind)
        } else {
            supported
        }
    }

    /// Select a unit and disable any enabled function it does not support.
    pub fn select_unit(&mut self, unit: Unit) {
        let previous = self.unit.as_ref().map(|u| u.category);
        info!(
            unit_id = %unit.unit_id,
            category = %unit.category,
            "unit selected"
        );
        self.unit = Some(unit);
        if previous != self.unit.as_ref().map(|u| u.category) {
            self.reconcile_capabilities();
        }
    }

    /// Clear enabled flags that the current capability set does not allow.
    pub fn reconcile_capabilities(&mut self) {
        let capabilities = self.capabilities();
        for kind in SpecialFunctionKind::TOGGLEABLE {
            if self.functions.is_enabled(kind) && !capabilities.supports(kind) {
                self.functions.set_enabled(kind, false);
                info!(function = %kind, "special function disabled: not supported by unit");
            }
        }
    }

    /// Stage a value for a slot. Nothing downstream sees it until
    /// [`ConfigurationState::commit_parameter`].
    pub fn set_parameter(&mut self, slot: SlotId, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(StateError::NonFiniteParameter { slot, value });
        }
        if let Some(target) = self.parameters.slot_mut(slot) {
            target.stage(value);
        }
        Ok(())
    }

    /// Promote the staged value of a slot. Returns the committed value, or
    /// `None` when nothing was staged.
    pub fn commit_parameter(&mut self, slot: SlotId) -> Option<f64> {
        let committed = self.parameters.slot_mut(slot)?.commit();
        if let Some(value) = committed {
            debug!(%slot, value, "parameter committed");
        }
        committed
    }

    /// Stage and commit in one step.
    pub fn set_and_commit_parameter(&mut self, slot: SlotId, value: f64) -> Result<()> {
        self.set_parameter(slot, value)?;
        self.commit_parameter(slot);
        Ok(())
    }

    /// Replace the display names of one side's slots.
    pub fn set_parameter_names(&mut self, side: ParameterSide, names: &[String]) -> Result<()> {
        self.parameters.set_names(side, names)?;
        debug!(%side, "parameter names replaced");
        Ok(())
    }

    /// Enable or disable a special function.
    ///
    /// Unsupported functions and rod orientation are ignored. Returns whether
    /// the flag was applied.
    pub fn toggle_special_function(&mut self, kind: SpecialFunctionKind, enabled: bool) -> bool {
        if !kind.is_toggleable() {
            debug!(function = %kind, "special function has no on/off flag; ignored");
            return false;
        }
        if !self.capabilities().supports(kind) {
            debug!(function = %kind, enabled, "special function not supported by unit; ignored");
            return false;
        }
        self.functions.set_enabled(kind, enabled);
        info!(function = %kind, enabled, "special function toggled");
        true
    }

    /// Replace the parameters of a special function. The enabled flag is kept.
    pub fn configure_special_function(&mut self, config: SpecialFunction) {
        debug!(function = %config.kind(), "special function configured");
        self.functions.set_config(config);
    }

    pub fn set_max_force_limit(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(StateError::NonFiniteLimit { value });
        }
        self.safety.max_force_limit = value;
        Ok(())
    }

    /// Mutable access to the result selection through its operations.
    pub fn result_selector(&mut self) -> ResultSelector<'_> {
        ResultSelector::new(&mut self.results)
    }

    /// Reset every configuration field to its default.
    pub fn clear_configuration(&mut self) {
        *self = Self::default();
        info!("configuration cleared");
    }

    /// Drop staged edits, e.g. before persisting.
    pub fn discard_staged(&mut self) {
        self.parameters.discard_staged();
    }
}
