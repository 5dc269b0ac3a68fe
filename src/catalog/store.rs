//! Holds the active resource catalog.
//!
//! A store hands out `Arc` snapshots: each validation captures one snapshot
//! up front, so a concurrent swap never changes the catalog underneath it.
//! Swaps replace the whole catalog; nothing edits entries in place.

use crate::catalog::builtin::builtin_catalog;
use crate::catalog::model::ResourceCatalog;
use std::sync::{Arc, OnceLock, RwLock};

#[derive(Default)]
/// Swappable catalog slot that falls back to the built-in catalog.
pub struct CatalogStore {
    active: RwLock<Option<Arc<ResourceCatalog>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with `catalog` instead of the built-in default.
    pub fn with_catalog(catalog: ResourceCatalog) -> Self {
        Self {
            active: RwLock::new(Some(Arc::new(catalog))),
        }
    }

    /// Process-wide store used by the crate-level convenience functions.
    pub fn global() -> &'static CatalogStore {
        static GLOBAL: OnceLock<CatalogStore> = OnceLock::new();
        GLOBAL.get_or_init(CatalogStore::new)
    }

    /// Snapshot of the active catalog, materializing the default on first use.
    pub fn get(&self) -> Arc<ResourceCatalog> {
        if let Some(catalog) = self
            .active
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .as_ref()
        {
            return Arc::clone(catalog);
        }

        let mut slot = self.active.write().unwrap_or_else(|err| err.into_inner());
        // Another caller may have filled the slot between the two locks.
        Arc::clone(slot.get_or_insert_with(|| Arc::new(builtin_catalog())))
    }

    /// Replace the active catalog; `None` restores the built-in default.
    ///
    /// The incoming catalog is not validated. Use `lint_catalog` beforehand
    /// when the source is untrusted.
    pub fn set(&self, catalog: Option<ResourceCatalog>) {
        let next = catalog.map(Arc::new);
        match &next {
            Some(catalog) => tracing::info!(resources = catalog.len(), "resource catalog replaced"),
            None => tracing::info!("resource catalog reset to built-in default"),
        }
        *self.active.write().unwrap_or_else(|err| err.into_inner()) = next;
    }

    pub fn reset(&self) {
        self.set(None);
    }
}

/// Active catalog of the process-wide store.
pub fn get_catalog() -> Arc<ResourceCatalog> {
    CatalogStore::global().get()
}

/// Swap the process-wide catalog; `None` restores the built-in default.
pub fn set_catalog(catalog: Option<ResourceCatalog>) {
    CatalogStore::global().set(catalog);
}

pub fn reset_catalog() {
    CatalogStore::global().reset();
}
