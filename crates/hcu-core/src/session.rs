//! A single user's session: identity, current step and configuration.

use serde::{Deserialize, Serialize};
use tracing::info;

use hcu_catalog::UnitCatalog;

use crate::navigation::WizardStep;
use crate::state::ConfigurationState;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Placeholder identity; not an authentication boundary.
    pub user: Option<String>,
    pub step: WizardStep,
    pub state: ConfigurationState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, user: impl Into<String>) {
        let user = user.into();
        info!(user = %user, "user logged in");
        self.user = Some(user);
    }

    /// Reset identity, step and configuration.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user, "user logged out");
        }
        *self = Self::default();
    }

    /// Reset the configuration only; the user stays logged in.
    pub fn clear_configuration(&mut self) {
        self.state.clear_configuration();
    }

    pub fn goto(&mut self, step: WizardStep) {
        self.step = step;
    }

    /// Move forward; stays put on the last step.
    pub fn next(&mut self) -> WizardStep {
        if let Some(step) = self.step.next() {
            self.step = step;
        }
        self.step
    }

    /// Move back; stays put on the first step.
    pub fn prev(&mut self) -> WizardStep {
        if let Some(step) = self.step.prev() {
            self.step = step;
        }
        self.step
    }

    /// Select the catalog's default unit when none is selected yet.
    /// Returns whether a unit was selected.
    pub fn preselect_default_unit(&mut self, catalog: &UnitCatalog) -> bool {
        if self.state.unit().is_some() {
            return false;
        }
        match catalog.default_unit() {
            Some(unit) => {
                self.state.select_unit(unit.clone());
                true
            }
            None => false,
        }
    }
}
