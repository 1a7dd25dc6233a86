//! Validation engine tests.

use hcu_core::ConfigurationState;
use hcu_model::{ParameterSide, SlotId, Unit, UnitSpecs};
use hcu_validate::{ExportReadiness, IssueKind, gate_export, readiness, validate};
use proptest::prelude::*;

fn iahc() -> Unit {
    Unit::new(
        "IAHC",
        "IAHC-001",
        UnitSpecs {
            stroke: 3.0,
            overall_size: "6.8/1.6/1.6".to_string(),
            design_pressure: 345.0,
            design_water_depth: 3000.0,
            gas_volume: 12.5,
            weight: 14500.0,
            swl: 150.0,
        },
    )
}

fn complete_state() -> ConfigurationState {
    let mut state = ConfigurationState::new();
    state.select_unit(iahc());
    for side in ParameterSide::ALL {
        for id in SlotId::all(side) {
            state
                .set_and_commit_parameter(id, id.number() as f64)
                .expect("commit");
        }
    }
    state
}

#[test]
fn fresh_state_fails_everything() {
    let result = validate(&ConfigurationState::new());
    assert!(!result.ok);
    assert!(!result.unit_selected);
    assert_eq!(result.zero_unit_params.len(), 10);
    assert_eq!(result.zero_payload_params.len(), 10);
    assert_eq!(result.issue_count(), 21);
    assert_eq!(result.issues()[0].kind, IssueKind::NoUnitSelected);
    assert_eq!(readiness(&ConfigurationState::new()), ExportReadiness::NoUnit);
}

#[test]
fn complete_state_passes() {
    let state = complete_state();
    let result = validate(&state);
    assert!(result.ok);
    assert!(result.issues().is_empty());
    assert!(readiness(&state).is_ready());
    assert!(!gate_export(&result).block_export);
}

#[test]
fn zero_lists_use_display_names_in_slot_order() {
    let mut state = complete_state();
    state
        .set_and_commit_parameter(SlotId::payload(3).expect("slot"), 0.0)
        .expect("commit");
    state
        .set_and_commit_parameter(SlotId::payload(1).expect("slot"), 0.0)
        .expect("commit");
    let result = validate(&state);
    assert!(!result.ok);
    assert!(result.zero_unit_params.is_empty());
    assert_eq!(
        result.zero_payload_params,
        vec!["Available lifting height".to_string(), "Sling weight".to_string()]
    );
    let gate = gate_export(&result);
    assert!(gate.block_export);
    assert_eq!(gate.blocking_fields, result.zero_payload_params);
    assert!(matches!(readiness(&state), ExportReadiness::Incomplete(r) if r == result));
}

#[test]
fn staged_values_do_not_count() {
    let mut state = complete_state();
    let id = SlotId::unit(5).expect("slot");
    state.set_and_commit_parameter(id, 0.0).expect("commit");
    state.set_parameter(id, 3.0).expect("stage");
    assert!(!validate(&state).ok);
    state.commit_parameter(id);
    assert!(validate(&state).ok);
}

fn any_slot() -> impl Strategy<Value = SlotId> {
    (prop::bool::ANY, 1usize..=10).prop_map(|(payload, number)| {
        if payload {
            SlotId::payload(number).expect("slot")
        } else {
            SlotId::unit(number).expect("slot")
        }
    })
}

proptest! {
    #[test]
    fn zero_commit_fails_and_nonzero_restores(id in any_slot(), value in 0.1f64..1000.0) {
        let mut state = complete_state();
        state.set_parameter(id, 0.0).expect("stage");
        state.commit_parameter(id);
        let result = validate(&state);
        prop_assert!(!result.ok);
        let name = state.parameters().slot(id).expect("slot").name.clone();
        prop_assert!(result.zero_params(id.side()).contains(&name));

        state.set_parameter(id, value).expect("stage");
        state.commit_parameter(id);
        let result = validate(&state);
        prop_assert!(result.ok);
        prop_assert!(!result.zero_params(id.side()).contains(&name));
    }
}
