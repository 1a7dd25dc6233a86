//! Export serializer tests.

use chrono::NaiveDate;
use hcu_core::ConfigurationState;
use hcu_export::{ExportError, ExportOptions, serialize, serialize_at, write_artifact};
use hcu_model::{
    ConstantTension, ParameterSide, ResultCategory, ResultMode, RodLock, RodLockMode,
    RodLockOperation, SlotId, SpecialFunction, SpecialFunctionKind, Unit, UnitSpecs,
};

fn unit(type_name: &str, unit_id: &str) -> Unit {
    Unit::new(
        type_name,
        unit_id,
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

fn complete_state(selected: Unit) -> ConfigurationState {
    let mut state = ConfigurationState::new();
    state.select_unit(selected);
    for side in ParameterSide::ALL {
        for id in SlotId::all(side) {
            state
                .set_and_commit_parameter(id, id.number() as f64)
                .expect("commit parameter");
        }
    }
    state
}

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 26, 53))
        .expect("valid timestamp")
}

fn render(state: &ConfigurationState) -> String {
    serialize_at(state, &ExportOptions::default(), fixed_time())
        .expect("serialize")
        .text()
        .into_owned()
}

fn without_datetime(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with("# Datetime:"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn iahc_constant_tension_artifact() {
    let mut state = complete_state(unit("IAHC", "IAHC-001"));
    assert!(state.toggle_special_function(SpecialFunctionKind::ConstantTension, true));
    state.configure_special_function(SpecialFunction::ConstantTension(ConstantTension {
        start_time: 5.0,
        tolerance: 5.0,
    }));

    let artifact =
        serialize_at(&state, &ExportOptions::default(), fixed_time()).expect("serialize");
    assert_eq!(artifact.filename, "safelink_orcaflex_config_IAHC-001.ini");

    let text = artifact.text();
    assert!(text.contains("tension_start_time = 5.0\n"));
    assert!(text.contains("tension_tolerance = 5.0\n"));
    assert!(!text.contains("heave_start_time"));

    insta::assert_snapshot!(text.trim_end(), @r"
# External function Configuration File
# Generated by Safelink OrcaFlex Configuration Web Tool
# Version: 0.0.1
# Datetime: 2025-03-14 09:26:53
# Contact Safelink post@safelink.no if any questions.
#

[Unit]
category = IAHC
unit_type = IAHC
unit_id = IAHC-001

[Special_Functions]
quick_lifting = False
constant_tension = True
active_heave_compensation = False
rod_lock = False

[Function_Parameters]
rod_orientation = Rod Down (Standard)
tension_start_time = 5.0
tension_tolerance = 5.0

[Safety_Parameters]
max_force_limit = 2000.0

[Unit_Parameters]
parameter_1 = 1.0
parameter_2 = 2.0
parameter_3 = 3.0
parameter_4 = 4.0
parameter_5 = 5.0
parameter_6 = 6.0
parameter_7 = 7.0
parameter_8 = 8.0
parameter_9 = 9.0
parameter_10 = 10.0

[Payload_Parameters]
parameter_1 = 1.0
parameter_2 = 2.0
parameter_3 = 3.0
parameter_4 = 4.0
parameter_5 = 5.0
parameter_6 = 6.0
parameter_7 = 7.0
parameter_8 = 8.0
parameter_9 = 9.0
parameter_10 = 10.0

[Results]
customized = False
body_results = None
rod_results = None
payload_results = None
");
}

#[test]
fn output_is_deterministic_apart_from_datetime() {
    let state = complete_state(unit("Poseidon 250", "PHC-250"));
    let options = ExportOptions::default();
    let first = serialize(&state, &options).expect("first");
    let second = serialize(&state, &options).expect("second");
    assert_eq!(
        without_datetime(&first.text()),
        without_datetime(&second.text())
    );
    assert_eq!(render(&state), render(&state));
}

#[test]
fn incomplete_configuration_is_refused() {
    let mut state = complete_state(unit("IAHC", "IAHC-001"));
    state
        .set_and_commit_parameter(SlotId::payload(2).expect("slot"), 0.0)
        .expect("commit");
    match serialize(&state, &ExportOptions::default()) {
        Err(ExportError::Validation(result)) => {
            assert_eq!(result.zero_payload_params, vec!["Payload weight in air"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = serialize(&ConfigurationState::new(), &ExportOptions::default()).unwrap_err();
    assert!(matches!(err, ExportError::Validation(ref r) if !r.unit_selected));
}

#[test]
fn rod_lock_parameters_follow_labels() {
    let mut state = complete_state(unit("Shock Absorber", "SA-050"));
    state.toggle_special_function(SpecialFunctionKind::RodLock, true);
    state.configure_special_function(SpecialFunction::RodLock(RodLock {
        depth: 25.5,
        operation: RodLockOperation::Both,
        mode: RodLockMode::AutoUnlock,
        hold_time: 3.0,
        speed: 0.25,
    }));
    let text = render(&state);
    let expected = "[Function_Parameters]\n\
rod_orientation = Rod Down (Standard)\n\
rod_lock_depth = 25.5\n\
rod_lock_operation = Both Directions\n\
rod_lock_mode = Auto Unlock at Depth\n\
lock_hold_time = 3.0\n\
lock_speed = 0.25\n\n";
    assert!(text.contains(expected), "{text}");
    assert!(text.contains("category = ShockAbsorber\n"));
    assert!(text.contains("rod_lock = True\n"));
}

#[test]
fn unsupported_enabled_flag_is_ignored() {
    let mut state = complete_state(unit("IAHC", "IAHC-001"));
    state.toggle_special_function(SpecialFunctionKind::ActiveHeaveCompensation, true);

    // Persisted state edited to a PHC unit without going through select_unit.
    let mut value = serde_json::to_value(&state).expect("to json");
    value["unit"]["category"] = serde_json::Value::String("PHC".to_string());
    let tampered: ConfigurationState = serde_json::from_value(value).expect("from json");
    assert!(
        tampered
            .functions()
            .is_enabled(SpecialFunctionKind::ActiveHeaveCompensation)
    );

    let text = render(&tampered);
    assert!(text.contains("active_heave_compensation = False\n"));
    assert!(!text.contains("heave_start_time"));
    assert!(!text.contains("motion_reference"));
}

#[test]
fn customized_results_in_catalog_order() {
    let mut state = complete_state(unit("IAHC", "IAHC-001"));
    let mut selector = state.result_selector();
    selector.set_mode(ResultMode::Customized);
    selector
        .toggle(ResultCategory::Body, "Measured Stroke (S_m)")
        .expect("toggle");
    selector
        .toggle(ResultCategory::Rod, "Setpoint (F_sp_CT)")
        .expect("toggle");
    selector
        .toggle(ResultCategory::Rod, "S-curve (S_curve_x)")
        .expect("toggle");

    let text = render(&state);
    assert!(text.contains("customized = True\n"));
    assert!(text.contains(
        "body_results = Force (F_fb), Force Active (F_active), Measured Stroke (S_m)\n"
    ));
    assert!(text.contains("rod_results = None\n"));
    assert!(text.contains("payload_results = acc_payload_MRU, v_payload_m\n"));
}

#[test]
fn customized_but_empty_exports_defaults() {
    let mut state = complete_state(unit("IAHC", "IAHC-001"));
    let mut selector = state.result_selector();
    selector.set_mode(ResultMode::Customized);
    for category in ResultCategory::ALL {
        for option in category.defaults() {
            selector.toggle(category, option).expect("toggle");
        }
    }
    let text = render(&state);
    assert!(text.contains("customized = False\n"));
    assert!(text.contains("body_results = None\n"));
}

#[test]
fn custom_header_identity() {
    let state = complete_state(unit("IAHC", "IAHC-001"));
    let options = ExportOptions {
        tool_name: "Rig Planner".to_string(),
        version: "2.1.0".to_string(),
        contact: "support@example.com".to_string(),
        filename_prefix: "rig".to_string(),
    };
    let artifact = serialize_at(&state, &options, fixed_time()).expect("serialize");
    assert_eq!(artifact.filename, "rig_IAHC-001.ini");
    let text = artifact.text();
    assert!(text.starts_with(
        "# External function Configuration File\n# Generated by Rig Planner\n# Version: 2.1.0\n"
    ));
    assert!(text.contains("# Contact support@example.com if any questions.\n#\n\n[Unit]\n"));
}

#[test]
fn write_artifact_replaces_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("exports");
    let state = complete_state(unit("IAHC", "IAHC-001"));
    let artifact =
        serialize_at(&state, &ExportOptions::default(), fixed_time()).expect("serialize");

    let path = write_artifact(&out, &artifact).expect("write");
    assert_eq!(path, out.join("safelink_orcaflex_config_IAHC-001.ini"));
    assert_eq!(std::fs::read(&path).expect("read back"), artifact.bytes);

    let mut state = state;
    state.set_max_force_limit(1500.0).expect("limit");
    let updated =
        serialize_at(&state, &ExportOptions::default(), fixed_time()).expect("serialize");
    write_artifact(&out, &updated).expect("overwrite");
    assert_eq!(std::fs::read(&path).expect("read back"), updated.bytes);

    let leftovers: Vec<_> = std::fs::read_dir(&out)
        .expect("list")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
    assert_eq!(std::fs::read_dir(&out).expect("list").count(), 1);
}
