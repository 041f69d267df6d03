//! Controller Rules
//!
//! Event-handling decisions that do not depend on the DOM.

use crate::catalog::{CatalogStore, DurableSlot};
use crate::models::LoadState;

pub const DELETE_PROMPT: &str = "Bạn có chắc muốn xóa sản phẩm này?";

/// Ask `confirm`, then remove `id`. A "no" answer leaves the store untouched.
/// Returns whether a product was removed.
pub fn confirm_remove<S: DurableSlot>(
    store: &mut CatalogStore<S>,
    id: u64,
    confirm: impl FnOnce(&str) -> bool,
) -> bool {
    if !confirm(DELETE_PROMPT) {
        log::debug!("Removal of #{} cancelled", id);
        return false;
    }
    store.remove(id)
}

/// The add form only works on a loaded catalog; after a failed load the
/// list is replaced by the error message, so new products would be invisible.
pub fn can_add(load: &LoadState) -> bool {
    *load == LoadState::Ready
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemorySlot, StaticSeed};
    use std::cell::RefCell;

    async fn loaded_store() -> CatalogStore<MemorySlot> {
        let mut store = CatalogStore::new(MemorySlot::new(), "products", "https://placehold.co/?text=");
        store.initialize(&StaticSeed).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_declined_confirmation_keeps_product() {
        let mut store = loaded_store().await;
        let before = store.list().to_vec();
        let slot_before = store.slot().get("products").unwrap();
        let asked = RefCell::new(None);

        let removed = confirm_remove(&mut store, before[0].id, |prompt| {
            *asked.borrow_mut() = Some(prompt.to_string());
            false
        });

        assert!(!removed);
        assert_eq!(asked.into_inner().as_deref(), Some(DELETE_PROMPT));
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.slot().get("products").unwrap(), slot_before);
    }

    #[tokio::test]
    async fn test_accepted_confirmation_removes_product() {
        let mut store = loaded_store().await;
        let id = store.list()[0].id;

        assert!(confirm_remove(&mut store, id, |_| true));

        assert_eq!(store.list().len(), 2);
        assert!(store.list().iter().all(|i| i.id != id));
    }

    #[test]
    fn test_add_only_on_loaded_catalog() {
        assert!(can_add(&LoadState::Ready));
        assert!(!can_add(&LoadState::Loading));
        assert!(!can_add(&LoadState::Failed("404".to_string())));
    }
}
