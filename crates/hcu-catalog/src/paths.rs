//! Catalog and asset path resolution.

use std::path::{Path, PathBuf};

use hcu_model::UnitCategory;

/// Environment variable for overriding the catalog file.
pub const CATALOG_ENV_VAR: &str = "HCU_CATALOG";

/// Catalog file name under the workspace `catalog/` directory.
pub const DEFAULT_CATALOG_FILE: &str = "units.csv";

/// Image used when neither a per-unit nor a category image exists.
pub const FALLBACK_IMAGE: &str = "ahc.jpg";

/// Get the default catalog path.
///
/// Resolution order:
/// 1. `HCU_CATALOG` environment variable
/// 2. `catalog/units.csv` relative to the workspace root
pub fn default_catalog_path() -> PathBuf {
    if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../catalog")
        .join(DEFAULT_CATALOG_FILE)
}

/// Image shown for a category when the unit has no dedicated picture.
pub fn category_image(category: UnitCategory) -> &'static str {
    match category {
        UnitCategory::Iahc => "ahc.jpg",
        UnitCategory::Phc => "phc.jpg",
        UnitCategory::ShockAbsorber => "shock_absorber.jpg",
    }
}

/// Resolve the picture for a unit.
///
/// Tries `<figures>/<unit_id>.jpg`, then the category image, then
/// [`FALLBACK_IMAGE`]. The fallback path is returned even if it is missing.
pub fn unit_image(figures_dir: &Path, unit_id: &str, category: UnitCategory) -> PathBuf {
    let specific = figures_dir.join(format!("{unit_id}.jpg"));
    if specific.is_file() {
        return specific;
    }
    let by_category = figures_dir.join(category_image(category));
    if by_category.is_file() {
        return by_category;
    }
    figures_dir.join(FALLBACK_IMAGE)
}
