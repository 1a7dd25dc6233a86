//! Validation engine: is the configuration complete enough to export?
//!
//! A parameter counts as missing when its committed value is exactly zero.
//! Zero is the only "not configured" marker, so a parameter that is
//! physically zero cannot be exported.

use serde::Serialize;
use tracing::debug;

use hcu_core::ConfigurationState;
use hcu_model::ParameterSide;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub unit_selected: bool,
    /// Display names of zero-valued unit parameters, in slot order.
    pub zero_unit_params: Vec<String>,
    /// Display names of zero-valued payload parameters, in slot order.
    pub zero_payload_params: Vec<String>,
}

impl ValidationResult {
    pub fn zero_params(&self, side: ParameterSide) -> &[String] {
        match side {
            ParameterSide::Unit => &self.zero_unit_params,
            ParameterSide::Payload => &self.zero_payload_params,
        }
    }

    /// One issue per failed check, for display.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if !self.unit_selected {
            issues.push(ValidationIssue {
                kind: IssueKind::NoUnitSelected,
                field: None,
                message: "No unit selected".to_string(),
            });
        }
        for side in ParameterSide::ALL {
            let kind = match side {
                ParameterSide::Unit => IssueKind::ZeroUnitParameter,
                ParameterSide::Payload => IssueKind::ZeroPayloadParameter,
            };
            for name in self.zero_params(side) {
                issues.push(ValidationIssue {
                    kind,
                    field: Some(name.clone()),
                    message: format!("{side} parameter '{name}' is zero"),
                });
            }
        }
        issues
    }

    pub fn issue_count(&self) -> usize {
        usize::from(!self.unit_selected)
            + self.zero_unit_params.len()
            + self.zero_payload_params.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    NoUnitSelected,
    ZeroUnitParameter,
    ZeroPayloadParameter,
}

impl IssueKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoUnitSelected => "HCU001",
            Self::ZeroUnitParameter => "HCU002",
            Self::ZeroPayloadParameter => "HCU003",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub field: Option<String>,
    pub message: String,
}

/// Check unit selection and that every committed parameter is non-zero.
pub fn validate(state: &ConfigurationState) -> ValidationResult {
    let zero = |side: ParameterSide| -> Vec<String> {
        state
            .parameters()
            .iter_side(side)
            .filter(|(_, slot)| slot.is_zero())
            .map(|(_, slot)| slot.name.clone())
            .collect()
    };
    let unit_selected = state.unit().is_some();
    let zero_unit_params = zero(ParameterSide::Unit);
    let zero_payload_params = zero(ParameterSide::Payload);
    let ok = unit_selected && zero_unit_params.is_empty() && zero_payload_params.is_empty();
    debug!(
        ok,
        unit_selected,
        zero_unit = zero_unit_params.len(),
        zero_payload = zero_payload_params.len(),
        "configuration validated"
    );
    ValidationResult {
        ok,
        unit_selected,
        zero_unit_params,
        zero_payload_params,
    }
}

/// Whether the export step can proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReadiness {
    NoUnit,
    Incomplete(ValidationResult),
    Ready,
}

impl ExportReadiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

pub fn readiness(state: &ConfigurationState) -> ExportReadiness {
    let result = validate(state);
    if result.ok {
        ExportReadiness::Ready
    } else if !result.unit_selected {
        ExportReadiness::NoUnit
    } else {
        ExportReadiness::Incomplete(result)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatingDecision {
    pub block_export: bool,
    pub blocking_fields: Vec<String>,
}

/// Decide whether an export may run, naming the fields that block it.
pub fn gate_export(result: &ValidationResult) -> GatingDecision {
    if result.ok {
        return GatingDecision::default();
    }
    let blocking_fields = result
        .issues()
        .into_iter()
        .map(|issue| issue.field.unwrap_or_else(|| "unit".to_string()))
        .collect();
    GatingDecision {
        block_export: true,
        blocking_fields,
    }
}
