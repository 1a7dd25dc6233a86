//! Answers profiles: a TOML file holding the wizard answers.
//!
//! A profile is applied through the configuration state operations, so the
//! same gating rules hold as for interactive edits: unsupported functions
//! are reported as ignored, parameters are staged and then committed.
//!
//! ```toml
//! unit = "IAHC-001"
//! max_force_limit = 1800.0
//!
//! [unit_parameters]
//! values = [1.5, 120.0, 2.0, 3.0, 0.5, 1.2, 4.0, 5.0, 6.0, 7.0]
//!
//! [payload_parameters]
//! values = [8.0, 45.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
//! names = ["Lift height", "Weight", "Slings", "P4", "Area", "Volume",
//!          "L1", "L2", "L3", "L4"]
//!
//! [functions.constant_tension]
//! enabled = true
//! tolerance = 2.5
//!
//! [functions]
//! rod_orientation = "Rod Up (Inverted)"
//!
//! [results]
//! mode = "customized"
//! body = ["Force (F_fb)"]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use hcu_catalog::UnitCatalog;
use hcu_core::ConfigurationState;
use hcu_model::{
    ActiveHeaveCompensation, ConstantTension, MotionReference, ParameterSide, QuickLifting,
    ResultCategory, ResultMode, RodLock, RodLockMode, RodLockOperation, RodOrientation,
    SLOTS_PER_SIDE, SlotId, SpecialFunction, SpecialFunctionKind,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Unit ID to select.
    pub unit: Option<String>,
    pub unit_parameters: ParameterAnswers,
    pub payload_parameters: ParameterAnswers,
    pub functions: FunctionAnswers,
    pub results: Option<ResultAnswers>,
    pub max_force_limit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterAnswers {
    /// Values for slots 1..=n; at most ten.
    pub values: Vec<f64>,
    /// Replacement display names; exactly ten when given.
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FunctionAnswers {
    pub quick_lifting: Option<QuickLiftingAnswers>,
    pub constant_tension: Option<ConstantTensionAnswers>,
    pub active_heave_compensation: Option<AhcAnswers>,
    pub rod_lock: Option<RodLockAnswers>,
    pub rod_orientation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuickLiftingAnswers {
    pub enabled: Option<bool>,
    pub start_time: Option<f64>,
    pub acceleration_limit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConstantTensionAnswers {
    pub enabled: Option<bool>,
    pub start_time: Option<f64>,
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AhcAnswers {
    pub enabled: Option<bool>,
    pub start_time: Option<f64>,
    pub max_stroke_speed: Option<f64>,
    pub motion_reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RodLockAnswers {
    pub enabled: Option<bool>,
    pub depth: Option<f64>,
    pub operation: Option<String>,
    pub mode: Option<String>,
    pub hold_time: Option<f64>,
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultAnswers {
    /// `defaults` or `customized`.
    pub mode: Option<String>,
    pub body: Option<Vec<String>>,
    pub rod: Option<Vec<String>>,
    pub payload: Option<Vec<String>>,
}

impl ResultAnswers {
    fn list(&self, category: ResultCategory) -> Option<&[String]> {
        match category {
            ResultCategory::Body => self.body.as_deref(),
            ResultCategory::Rod => self.rod.as_deref(),
            ResultCategory::Payload => self.payload.as_deref(),
        }
    }
}

/// What applying a profile changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub unit_id: Option<String>,
    pub committed_parameters: usize,
    pub toggled: Vec<SpecialFunctionKind>,
    /// Enable requests the selected unit does not support.
    pub ignored: Vec<SpecialFunctionKind>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read profile {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parse profile {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the answers in wizard order: unit, parameters, functions,
    /// results, safety limit. A failure part way leaves earlier answers
    /// applied.
    pub fn apply(
        &self,
        state: &mut ConfigurationState,
        catalog: &UnitCatalog,
    ) -> Result<ApplyReport> {
        let mut report = ApplyReport::default();

        if let Some(unit_id) = &self.unit {
            let unit = catalog.lookup(unit_id)?.clone();
            state.select_unit(unit);
            report.unit_id = Some(unit_id.clone());
        }

        for (side, answers) in [
            (ParameterSide::Unit, &self.unit_parameters),
            (ParameterSide::Payload, &self.payload_parameters),
        ] {
            report.committed_parameters += apply_parameters(state, side, answers)?;
        }

        self.apply_functions(state, &mut report)?;

        if let Some(results) = &self.results {
            apply_results(state, results)?;
        }

        if let Some(limit) = self.max_force_limit {
            state.set_max_force_limit(limit)?;
        }

        info!(
            unit = report.unit_id.as_deref().unwrap_or("-"),
            committed = report.committed_parameters,
            toggled = report.toggled.len(),
            ignored = report.ignored.len(),
            "profile applied"
        );
        Ok(report)
    }

    fn apply_functions(
        &self,
        state: &mut ConfigurationState,
        report: &mut ApplyReport,
    ) -> Result<()> {
        let functions = &self.functions;
        let current = state.functions().clone();

        if let Some(answers) = &functions.quick_lifting {
            let defaults = current.quick_lifting();
            state.configure_special_function(SpecialFunction::QuickLifting(QuickLifting {
                start_time: answers.start_time.unwrap_or(defaults.start_time),
                acceleration_limit: answers
                    .acceleration_limit
                    .unwrap_or(defaults.acceleration_limit),
            }));
            toggle(state, report, SpecialFunctionKind::QuickLifting, answers.enabled);
        }

        if let Some(answers) = &functions.constant_tension {
            let defaults = current.constant_tension();
            state.configure_special_function(SpecialFunction::ConstantTension(ConstantTension {
                start_time: answers.start_time.unwrap_or(defaults.start_time),
                tolerance: answers.tolerance.unwrap_or(defaults.tolerance),
            }));
            toggle(state, report, SpecialFunctionKind::ConstantTension, answers.enabled);
        }

        if let Some(answers) = &functions.active_heave_compensation {
            let defaults = current.active_heave_compensation();
            let motion_reference = match &answers.motion_reference {
                Some(label) => label.parse::<MotionReference>()?,
                None => defaults.motion_reference,
            };
            state.configure_special_function(SpecialFunction::ActiveHeaveCompensation(
                ActiveHeaveCompensation {
                    start_time: answers.start_time.unwrap_or(defaults.start_time),
                    max_stroke_speed: answers
                        .max_stroke_speed
                        .unwrap_or(defaults.max_stroke_speed),
                    motion_reference,
                },
            ));
            toggle(
                state,
                report,
                SpecialFunctionKind::ActiveHeaveCompensation,
                answers.enabled,
            );
        }

        if let Some(answers) = &functions.rod_lock {
            let defaults = current.rod_lock();
            let operation = match &answers.operation {
                Some(label) => label.parse::<RodLockOperation>()?,
                None => defaults.operation,
            };
            let mode = match &answers.mode {
                Some(label) => label.parse::<RodLockMode>()?,
                None => defaults.mode,
            };
            state.configure_special_function(SpecialFunction::RodLock(RodLock {
                depth: answers.depth.unwrap_or(defaults.depth),
                operation,
                mode,
                hold_time: answers.hold_time.unwrap_or(defaults.hold_time),
                speed: answers.speed.unwrap_or(defaults.speed),
            }));
            toggle(state, report, SpecialFunctionKind::RodLock, answers.enabled);
        }

        if let Some(label) = &functions.rod_orientation {
            let orientation = label.parse::<RodOrientation>()?;
            state.configure_special_function(SpecialFunction::RodOrientation(orientation));
        }
        Ok(())
    }
}

fn toggle(
    state: &mut ConfigurationState,
    report: &mut ApplyReport,
    kind: SpecialFunctionKind,
    enabled: Option<bool>,
) {
    let Some(enabled) = enabled else {
        return;
    };
    if state.toggle_special_function(kind, enabled) {
        report.toggled.push(kind);
    } else if enabled {
        warn!(function = %kind, "not supported by the selected unit; ignored");
        report.ignored.push(kind);
    }
}

fn apply_parameters(
    state: &mut ConfigurationState,
    side: ParameterSide,
    answers: &ParameterAnswers,
) -> Result<usize> {
    if answers.values.len() > SLOTS_PER_SIDE {
        bail!(
            "{side} parameters: expected at most {SLOTS_PER_SIDE} values, got {}",
            answers.values.len()
        );
    }
    if let Some(names) = &answers.names {
        state.set_parameter_names(side, names)?;
    }
    for (index, value) in answers.values.iter().enumerate() {
        let slot = SlotId::new(side, index + 1)?;
        state.set_parameter(slot, *value)?;
        state.commit_parameter(slot);
    }
    Ok(answers.values.len())
}

fn apply_results(state: &mut ConfigurationState, answers: &ResultAnswers) -> Result<()> {
    let mut selector = state.result_selector();
    if let Some(mode) = &answers.mode {
        selector.set_mode(mode.parse::<ResultMode>()?);
    }
    for category in ResultCategory::ALL {
        let Some(options) = answers.list(category) else {
            continue;
        };
        if let Some(unknown) = options.iter().find(|o| !category.contains(o.as_str())) {
            bail!("'{unknown}' is not a {category} result channel");
        }
        for option in category.catalog() {
            let wanted = options.iter().any(|o| o == option);
            selector.set_selected(category, option, wanted)?;
        }
    }
    Ok(())
}
