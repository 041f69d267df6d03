//! View State Store
//!
//! Uses Leptos reactive_stores for the UI-side state: search text, sort key,
//! load progress and the add form. The product list itself lives in
//! `CatalogStore` and is only ever projected from.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::AddForm;
use crate::models::{LoadState, SortKey};

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Current search box text
    pub query: String,
    /// Current sort selector value
    pub sort: SortKey,
    /// Progress of the initial load
    pub load: LoadState,
    /// Bumped after every catalog mutation to re-derive the display list
    pub revision: u32,
    /// Add-product panel
    pub form: AddForm,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_query(store: &ViewStore) -> String {
    store.query().read().clone()
}

pub fn store_set_query(store: &ViewStore, query: String) {
    *store.query().write() = query;
}

pub fn store_sort(store: &ViewStore) -> SortKey {
    *store.sort().read()
}

pub fn store_set_sort(store: &ViewStore, sort: SortKey) {
    *store.sort().write() = sort;
}

pub fn store_load(store: &ViewStore) -> LoadState {
    store.load().read().clone()
}

pub fn store_set_load(store: &ViewStore, load: LoadState) {
    *store.load().write() = load;
}

/// Track the catalog revision
pub fn store_revision(store: &ViewStore) -> u32 {
    *store.revision().read()
}

pub fn store_bump_revision(store: &ViewStore) {
    *store.revision().write() += 1;
}

/// Read the add form
pub fn store_with_form<R>(store: &ViewStore, f: impl FnOnce(&AddForm) -> R) -> R {
    f(&store.form().read())
}

/// Mutate the add form
pub fn store_update_form<R>(store: &ViewStore, f: impl FnOnce(&mut AddForm) -> R) -> R {
    f(&mut store.form().write())
}
