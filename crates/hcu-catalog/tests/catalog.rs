//! Catalog loading, lookup and cache tests.

use std::fs;
use std::path::{Path, PathBuf};

use hcu_catalog::{CatalogCache, CatalogError, UnitCatalog, sha256_hex, unit_image};
use hcu_model::UnitCategory;

const HEADER: &str = "Unit Type,Unit ID,stroke [m],\"overall size [L/W/H, m]\",design pressure [bar],design water depth [m],gas volume [m3 @ atm],weight [kg],SWL [Te]\n";

fn write_catalog(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("units.csv");
    let mut body = HEADER.to_string();
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    fs::write(&path, body).expect("write catalog");
    path
}

fn shipped_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalog/units.csv")
}

#[test]
fn shipped_catalog_contains_all_categories() {
    let catalog = UnitCatalog::load(&shipped_catalog()).expect("load shipped catalog");
    let groups = catalog.categorize();
    assert!(!groups.iahc.is_empty());
    assert!(!groups.phc.is_empty());
    assert!(!groups.other.is_empty());

    let unit = catalog.lookup("IAHC-001").expect("IAHC-001 present");
    assert_eq!(unit.category, UnitCategory::Iahc);
    assert_eq!(
        catalog.default_unit().map(|u| u.unit_id.as_str()),
        Some("IAHC-001")
    );
}

#[test]
fn units_sorted_by_type_then_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(
        dir.path(),
        &[
            "Shock Absorber,SA-2,1,x,1,1,1,1000,10",
            "IAHC,IAHC-9,1,x,1,1,1,1000,10",
            "Poseidon 100,PHC-1,1,x,1,1,1,1000,10",
            "IAHC,IAHC-1,1,x,1,1,1,1000,10",
        ],
    );
    let catalog = UnitCatalog::load(&path).expect("load");
    let ids: Vec<&str> = catalog.units().iter().map(|u| u.unit_id.as_str()).collect();
    assert_eq!(ids, vec!["IAHC-1", "IAHC-9", "PHC-1", "SA-2"]);

    let groups = catalog.categorize();
    assert_eq!(groups.phc.len(), 1);
    assert_eq!(groups.phc[0].type_name, "Poseidon 100");
    assert_eq!(groups.other[0].category, UnitCategory::ShockAbsorber);
}

#[test]
fn fingerprint_matches_source_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(dir.path(), &["IAHC,IAHC-1,1,x,1,1,1,1000,10"]);
    let bytes = fs::read(&path).expect("read back");
    let catalog = UnitCatalog::load(&path).expect("load");
    assert_eq!(catalog.fingerprint(), Some(sha256_hex(&bytes).as_str()));
    assert_eq!(catalog.source(), Some(path.as_path()));
}

#[test]
fn missing_file_is_data_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = UnitCatalog::load(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.is_data_load());
}

#[test]
fn duplicate_unit_id_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(
        dir.path(),
        &[
            "IAHC,IAHC-1,1,x,1,1,1,1000,10",
            "Poseidon 100,IAHC-1,1,x,1,1,1,1000,10",
        ],
    );
    let err = UnitCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateUnitId { ref unit_id, .. } if unit_id == "IAHC-1"));
    assert!(err.is_data_load());
}

#[test]
fn unknown_unit_is_not_found() {
    let catalog = UnitCatalog::load(&shipped_catalog()).expect("load");
    let err = catalog.lookup_specs("NOPE-1").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert!(!err.is_data_load());
}

#[test]
fn empty_catalog_has_no_default_unit() {
    let catalog = UnitCatalog::empty();
    assert!(catalog.is_empty());
    assert!(catalog.default_unit().is_none());
}

#[test]
fn default_unit_falls_back_to_phc() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(
        dir.path(),
        &[
            "Shock Absorber,SA-1,1,x,1,1,1,1000,10",
            "Poseidon 250,PHC-250,1,x,1,1,1,1000,10",
        ],
    );
    let catalog = UnitCatalog::load(&path).expect("load");
    assert_eq!(
        catalog.default_unit().map(|u| u.unit_id.as_str()),
        Some("PHC-250")
    );
}

#[test]
fn cache_reloads_only_after_invalidate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(dir.path(), &["IAHC,IAHC-1,1,x,1,1,1,1000,10"]);
    let mut cache = CatalogCache::new(&path);
    assert!(!cache.is_loaded());
    assert_eq!(cache.get().expect("first load").len(), 1);

    write_catalog(
        dir.path(),
        &[
            "IAHC,IAHC-1,1,x,1,1,1,1000,10",
            "IAHC,IAHC-2,1,x,1,1,1,1000,10",
        ],
    );
    assert_eq!(cache.get().expect("cached").len(), 1);

    cache.invalidate();
    assert!(!cache.is_loaded());
    assert_eq!(cache.get().expect("reload").len(), 2);
}

#[test]
fn unit_image_falls_back_by_category() {
    let dir = tempfile::tempdir().expect("tempdir");
    let figures = dir.path();
    assert_eq!(
        unit_image(figures, "PHC-1", UnitCategory::Phc),
        figures.join("ahc.jpg")
    );

    fs::write(figures.join("phc.jpg"), b"jpg").expect("write category image");
    assert_eq!(
        unit_image(figures, "PHC-1", UnitCategory::Phc),
        figures.join("phc.jpg")
    );

    fs::write(figures.join("PHC-1.jpg"), b"jpg").expect("write unit image");
    assert_eq!(
        unit_image(figures, "PHC-1", UnitCategory::Phc),
        figures.join("PHC-1.jpg")
    );
}
