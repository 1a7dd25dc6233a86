//! Tests for hcu-model types.

use hcu_model::{
    ParameterSet, ParameterSide, ResultCategory, ResultSelection, RodOrientation, SafetyLimits,
    SlotId, SpecialFunction, SpecialFunctionKind, SpecialFunctions, Unit, UnitCategory,
    UnitSpecs,
};

fn specs() -> UnitSpecs {
    UnitSpecs {
        stroke: 3.0,
        overall_size: "4.2/1.1/1.1".to_string(),
        design_pressure: 210.0,
        design_water_depth: 3000.0,
        gas_volume: 1.5,
        weight: 7500.0,
        swl: 150.0,
    }
}

#[test]
fn category_follows_type_name() {
    assert_eq!(UnitCategory::from_type_name("IAHC"), UnitCategory::Iahc);
    assert_eq!(UnitCategory::from_type_name("iahc mk2"), UnitCategory::Iahc);
    assert_eq!(
        UnitCategory::from_type_name("Poseidon 250"),
        UnitCategory::Phc
    );
    assert_eq!(
        UnitCategory::from_type_name("Shock Absorber"),
        UnitCategory::ShockAbsorber
    );
    assert_eq!(
        UnitCategory::from_type_name("Crane Damper"),
        UnitCategory::ShockAbsorber
    );
}

#[test]
fn category_labels_parse_both_forms() {
    for category in UnitCategory::ALL {
        let from_key: UnitCategory = category.as_str().parse().expect("parse key");
        let from_label: UnitCategory = category.display_name().parse().expect("parse label");
        assert_eq!(from_key, category);
        assert_eq!(from_label, category);
    }
    assert!("Winch".parse::<UnitCategory>().is_err());
}

#[test]
fn unit_specs_display_rows() {
    let unit = Unit::new("IAHC", "IAHC-001", specs());
    assert_eq!(unit.category, UnitCategory::Iahc);
    let rows = unit.specs.display_rows();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], ("Stroke", "3 m".to_string()));
    assert_eq!(rows[5], ("Weight", "7.5 tonnes".to_string()));
    assert_eq!(rows[6], ("SWL", "150.0 Te".to_string()));
}

#[test]
fn default_parameters_are_zero_with_named_slots() {
    let set = ParameterSet::default();
    assert!(set.is_complete());
    for side in ParameterSide::ALL {
        for (id, slot) in set.iter_side(side) {
            assert!(slot.is_zero(), "{id} should start at zero");
        }
    }
    let first = set.slot(SlotId::unit(1).expect("slot")).expect("slot present");
    assert_eq!(first.label(), "Equilibrium stroke position [m]");
    let weight = set
        .slot(SlotId::payload(2).expect("slot"))
        .expect("slot present");
    assert_eq!(weight.label(), "Payload weight in air [Te]");
}

#[test]
fn special_functions_default_disabled() {
    let functions = SpecialFunctions::default();
    for kind in SpecialFunctionKind::ALL {
        assert!(!functions.is_enabled(kind));
        assert_eq!(functions.entry(kind).config.kind(), kind);
    }
    assert_eq!(functions.quick_lifting().start_time, 10.0);
    assert_eq!(functions.constant_tension().tolerance, 5.0);
    assert_eq!(functions.active_heave_compensation().max_stroke_speed, 2.0);
    assert_eq!(functions.rod_lock().speed, 0.5);
    assert_eq!(functions.rod_orientation(), RodOrientation::RodDown);
}

#[test]
fn special_functions_deserialize_normalizes_entries() {
    let mut functions = SpecialFunctions::default();
    functions.set_enabled(SpecialFunctionKind::RodLock, true);
    functions.set_config(SpecialFunction::RodOrientation(RodOrientation::RodUp));

    let json = serde_json::to_string(&functions).expect("serialize functions");
    let round: SpecialFunctions = serde_json::from_str(&json).expect("deserialize functions");
    assert_eq!(round, functions);

    // A partial list still yields every kind.
    let partial: SpecialFunctions = serde_json::from_str(
        r#"[{"enabled":true,"config":{"kind":"QuickLifting","params":{"start_time":3.0,"acceleration_limit":0.4}}}]"#,
    )
    .expect("deserialize partial");
    assert!(partial.is_enabled(SpecialFunctionKind::QuickLifting));
    assert_eq!(partial.quick_lifting().start_time, 3.0);
    assert!(!partial.is_enabled(SpecialFunctionKind::ConstantTension));
    assert_eq!(partial.iter().count(), SpecialFunctionKind::ALL.len());
}

#[test]
fn staged_values_are_not_serialized() {
    let mut set = ParameterSet::default();
    let id = SlotId::unit(3).expect("slot");
    set.slot_mut(id).expect("slot").stage(4.0);
    let json = serde_json::to_string(&set).expect("serialize parameters");
    let round: ParameterSet = serde_json::from_str(&json).expect("deserialize parameters");
    assert_eq!(round.slot(id).expect("slot").staged(), None);
    assert_eq!(round.slot(id).expect("slot").value(), 0.0);
}

#[test]
fn result_defaults_and_limits() {
    let selection = ResultSelection::default();
    assert_eq!(
        selection.ordered(ResultCategory::Body),
        vec!["Force (F_fb)", "Force Active (F_active)"]
    );
    assert_eq!(
        selection.ordered(ResultCategory::Rod),
        vec!["Setpoint (F_sp_CT)", "S-curve (S_curve_x)"]
    );
    assert_eq!(
        selection.ordered(ResultCategory::Payload),
        vec!["acc_payload_MRU", "v_payload_m"]
    );
    assert!(!selection.is_empty());
    assert_eq!(SafetyLimits::default().max_force_limit, 2000.0);
}
