//! Configuration wizard core.
//!
//! - [`capability`] maps a unit category to the special functions it supports.
//! - [`ConfigurationState`] holds every user choice and enforces capability
//!   gating and the staged/committed parameter contract.
//! - [`ResultSelector`] edits the result channel selection.
//! - [`Session`] adds the placeholder identity and the current [`WizardStep`].

pub mod capability;
pub mod error;
pub mod navigation;
pub mod results;
pub mod session;
pub mod state;

pub use capability::{resolve, resolve_label};
pub use error::{Result, StateError};
pub use navigation::WizardStep;
pub use results::{ResultCounts, ResultSelector};
pub use session::Session;
pub use state::ConfigurationState;
