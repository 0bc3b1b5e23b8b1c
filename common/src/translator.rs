//! The active catalog handle.
//!
//! A [`Translator`] owns the catalog currently used for lookups. Installing a
//! catalog swaps an `Arc` under a short write lock; readers clone the `Arc`
//! under a read lock and resolve against their snapshot without holding it.
//! Every lookup therefore sees either the old or the new catalog entirely.
//!
//! Hosts that prefer a process-wide handle can use [`global`] and the free
//! functions [`install_catalog`], [`active_catalog`], and [`translate`].
//! Tests should construct their own [`Translator`] so installs never leak
//! between cases.

use std::sync::{Arc, PoisonError, RwLock};

use log::info;
use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::resolver::{Lookup, Resolution};

const LOG_TARGET: &str = "tsloc::translator";

static GLOBAL: Lazy<Translator> = Lazy::new(Translator::new);

/// Injectable handle holding the active catalog.
#[derive(Debug, Default)]
pub struct Translator {
    active: RwLock<Option<Arc<Catalog>>>,
}

impl Translator {
    /// Create a handle with no catalog installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with `catalog` already installed.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            active: RwLock::new(Some(Arc::new(catalog))),
        }
    }

    /// Install `catalog`, returning the previously active one.
    pub fn install_catalog(&self, catalog: Catalog) -> Option<Arc<Catalog>> {
        self.install_shared(Arc::new(catalog))
    }

    /// Install an already shared catalog, returning the previously active one.
    pub fn install_shared(&self, catalog: Arc<Catalog>) -> Option<Arc<Catalog>> {
        info!(
            target: LOG_TARGET,
            "installing catalog for {} ({} messages)",
            catalog.language().unwrap_or("unspecified language"),
            catalog.len(),
        );

        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(catalog)
    }

    /// Remove the active catalog, returning it.
    pub fn clear(&self) -> Option<Arc<Catalog>> {
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        guard.take()
    }

    /// Snapshot of the active catalog, if any.
    #[must_use]
    pub fn active_catalog(&self) -> Option<Arc<Catalog>> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a catalog is installed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Resolve `lookup` against the active catalog.
    ///
    /// ```
    /// use tsloc_common::{Catalog, Lookup, Translator};
    ///
    /// let translator = Translator::new();
    /// assert!(translator.translate(&Lookup::new("A", "Open")).is_err());
    ///
    /// translator.install_catalog(Catalog::new());
    /// assert_eq!(translator.translate(&Lookup::new("A", "Open")).unwrap(), "Open");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogNotLoaded`] when nothing is installed.
    pub fn translate(&self, lookup: &Lookup) -> Result<String, CatalogError> {
        self.translate_detailed(lookup)
            .map(|resolution| resolution.text)
    }

    /// Resolve `lookup`, reporting which fallback rule applied.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogNotLoaded`] when nothing is installed.
    pub fn translate_detailed(&self, lookup: &Lookup) -> Result<Resolution, CatalogError> {
        let catalog = self
            .active_catalog()
            .ok_or(CatalogError::CatalogNotLoaded)?;
        Ok(lookup.resolve_detailed(&catalog))
    }
}

/// The process-wide translator.
#[must_use]
pub fn global() -> &'static Translator {
    &GLOBAL
}

/// Install `catalog` into the process-wide translator.
pub fn install_catalog(catalog: Catalog) -> Option<Arc<Catalog>> {
    global().install_catalog(catalog)
}

/// Snapshot of the process-wide active catalog.
#[must_use]
pub fn active_catalog() -> Option<Arc<Catalog>> {
    global().active_catalog()
}

/// Resolve `lookup` with the process-wide translator.
///
/// # Errors
///
/// Returns [`CatalogError::CatalogNotLoaded`] when nothing is installed.
pub fn translate(lookup: &Lookup) -> Result<String, CatalogError> {
    global().translate(lookup)
}
