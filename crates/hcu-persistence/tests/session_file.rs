//! Session save/load tests.

use std::fs;

use hcu_core::{Session, WizardStep};
use hcu_model::{SlotId, SpecialFunctionKind, Unit, UnitSpecs};
use hcu_persistence::{
    CURRENT_SCHEMA_VERSION, PersistenceError, SessionFile, load_session, load_session_if_exists,
    save_session,
};
use tempfile::tempdir;

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

fn configured_session() -> Session {
    let mut session = Session::new();
    session.login("operator");
    session.goto(WizardStep::Results);
    session.state.select_unit(iahc());
    session
        .state
        .set_and_commit_parameter(SlotId::unit(1).expect("slot"), 1.5)
        .expect("commit");
    session
        .state
        .toggle_special_function(SpecialFunctionKind::QuickLifting, true);
    session
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("session.json");
    let session = configured_session();

    let mut file = SessionFile::new(&session, Some("abc123".to_string()));
    save_session(&path, &mut file).expect("save");
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_session(&path).expect("load");
    assert_eq!(loaded.schema_version, CURRENT_SCHEMA_VERSION);
    assert!(loaded.saved_at().is_some());
    assert!(!loaded.catalog_changed(Some("abc123")));
    assert!(loaded.catalog_changed(Some("def456")));
    assert!(!loaded.catalog_changed(None));

    let restored = loaded.into_session();
    assert_eq!(restored, session);
}

#[test]
fn staged_edits_are_not_saved() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    let mut session = configured_session();
    let id = SlotId::payload(2).expect("slot");
    session.state.set_parameter(id, 42.0).expect("stage");

    let mut file = SessionFile::new(&session, None);
    save_session(&path, &mut file).expect("save");
    let restored = load_session(&path).expect("load").into_session();
    let slot = restored.state.parameters().slot(id).expect("slot");
    assert_eq!(slot.staged(), None);
    assert_eq!(slot.value(), 0.0);
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"schema_version": 99, "something": "else"}"#).expect("write");
    let err = load_session(&path).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::UnsupportedVersion { found: 99, .. }
    ));
    assert!(err.user_message().contains("99"));
    assert!(err.suggestion().is_some());
}

#[test]
fn garbage_is_invalid_format() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").expect("write");
    let err = load_session(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidFormat { .. }));
}

#[test]
fn short_parameter_side_is_invalid_format() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    let mut file = SessionFile::new(&configured_session(), None);
    save_session(&path, &mut file).expect("save");

    let content = fs::read_to_string(&path).expect("read");
    let mut json: serde_json::Value = serde_json::from_str(&content).expect("json");
    json["state"]["parameters"]["unit"]
        .as_array_mut()
        .expect("unit slots")
        .truncate(3);
    fs::write(&path, serde_json::to_string(&json).expect("encode")).expect("write");

    let err = load_session(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidFormat { .. }));
    assert!(err.user_message().contains("unit parameters must hold 10 slots, got 3"));
}

#[test]
fn missing_file_is_optional() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    assert!(load_session_if_exists(&path).expect("no error").is_none());
    let err = load_session(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { operation: "read", .. }));
}
