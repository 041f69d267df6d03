//! Application Context
//!
//! The catalog store, configuration and view state, provided via the Leptos
//! Context API and handed to every component explicitly.

use leptos::prelude::*;

use crate::catalog::{derive, CatalogStore};
use crate::commands::LocalStorageSlot;
use crate::config::CatalogConfig;
use crate::controller;
use crate::models::CatalogItem;
use crate::store::{self, ViewStore};

pub type BrowserCatalog = CatalogStore<LocalStorageSlot>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// The authoritative product list
    pub catalog: StoredValue<BrowserCatalog>,
    pub config: StoredValue<CatalogConfig>,
    pub view: ViewStore,
}

impl AppContext {
    pub fn new(config: CatalogConfig, view: ViewStore) -> Self {
        let catalog = CatalogStore::new(
            LocalStorageSlot,
            config.storage_key.clone(),
            config.placeholder_base.clone(),
        );
        Self {
            catalog: StoredValue::new(catalog),
            config: StoredValue::new(config),
            view,
        }
    }

    /// Re-derive and repaint after a catalog mutation
    pub fn refresh(&self) {
        store::store_bump_revision(&self.view);
    }

    /// The display list for the current search text and sort key
    pub fn visible(&self) -> Vec<CatalogItem> {
        let _ = store::store_revision(&self.view);
        let query = store::store_query(&self.view);
        let sort = store::store_sort(&self.view);
        self.catalog
            .with_value(|catalog| derive(catalog.list(), &query, sort))
    }

    /// Number of products in the catalog, ignoring the search
    pub fn total(&self) -> usize {
        let _ = store::store_revision(&self.view);
        self.catalog.with_value(|catalog| catalog.list().len())
    }

    /// Submit the add form. Returns the stored product on success.
    pub fn submit_form(&self) -> Option<CatalogItem> {
        if !self.can_add() {
            return None;
        }
        let added = store::store_update_form(&self.view, |form| {
            self.catalog
                .try_update_value(|catalog| form.submit(catalog))
                .flatten()
        });
        if added.is_some() {
            self.refresh();
        }
        added
    }

    /// Whether the add form may be used for the current load state
    pub fn can_add(&self) -> bool {
        controller::can_add(&store::store_load(&self.view))
    }

    /// Remove a product once `confirm` approves it
    pub fn remove(&self, id: u64, confirm: impl FnOnce(&str) -> bool) {
        let removed = self
            .catalog
            .try_update_value(|catalog| controller::confirm_remove(catalog, id, confirm))
            .unwrap_or(false);
        if removed {
            self.refresh();
        }
    }

    pub fn placeholder_base(&self) -> String {
        self.config.with_value(|c| c.placeholder_base.clone())
    }

    pub fn currency_suffix(&self) -> String {
        self.config.with_value(|c| c.currency_suffix.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
