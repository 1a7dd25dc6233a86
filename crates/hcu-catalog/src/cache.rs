//! Load-once cache around [`UnitCatalog`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::UnitCatalog;
use crate::error::Result;

/// Keeps the catalog loaded for the lifetime of a session. Only
/// [`CatalogCache::invalidate`] causes a reload.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    catalog: Option<UnitCatalog>,
}

impl CatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// The cached catalog, loading it on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn get(&mut self) -> Result<&UnitCatalog> {
        let catalog = match self.catalog.take() {
            Some(cached) => {
                debug!(path = %self.path.display(), "unit catalog served from cache");
                cached
            }
            None => UnitCatalog::load(&self.path)?,
        };
        Ok(self.catalog.insert(catalog))
    }

    /// Drop the cached catalog so the next [`CatalogCache::get`] reloads it.
    pub fn invalidate(&mut self) {
        if self.catalog.take().is_some() {
            debug!(path = %self.path.display(), "unit catalog cache invalidated");
        }
    }
}
