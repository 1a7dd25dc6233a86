//! Unit catalog: the static table of compensation units a user can pick.
//!
//! The table is a CSV file (see [`loader`] for the expected columns), loaded
//! once per session through [`CatalogCache`]. Lookups of unknown ids return
//! [`CatalogError::NotFound`]; every other error is a data-load failure and
//! callers fall back to [`UnitCatalog::empty`].

pub mod cache;
pub mod catalog;
pub mod error;
pub mod hash;
pub mod loader;
pub mod paths;

pub use cache::CatalogCache;
pub use catalog::{Categorized, UnitCatalog};
pub use error::{CatalogError, Result};
pub use hash::sha256_hex;
pub use paths::{CATALOG_ENV_VAR, category_image, default_catalog_path, unit_image};
