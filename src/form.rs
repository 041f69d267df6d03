//! Add-Form State
//!
//! The add-product panel as a two-state machine plus its field values.

use crate::catalog::{CatalogStore, DurableSlot};
use crate::models::{CatalogItem, ProductDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Collapsed,
    Expanded,
}

/// Add-form panel, fields and inline error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddForm {
    pub panel: Panel,
    pub draft: ProductDraft,
    pub error: Option<String>,
}

impl AddForm {
    pub fn is_expanded(&self) -> bool {
        self.panel == Panel::Expanded
    }

    /// Switch panels. Returns `true` when the panel was expanded, so the
    /// caller can focus the name field.
    pub fn toggle(&mut self) -> bool {
        match self.panel {
            Panel::Collapsed => self.expand(),
            Panel::Expanded => self.collapse(),
        }
        self.is_expanded()
    }

    /// Entering `Expanded` clears any previous error
    pub fn expand(&mut self) {
        self.panel = Panel::Expanded;
        self.error = None;
    }

    /// Entering `Collapsed` resets every field
    pub fn collapse(&mut self) {
        self.panel = Panel::Collapsed;
        self.draft = ProductDraft::default();
    }

    /// Submit the current draft to `store`. On success the form resets and
    /// collapses; on failure the message is kept and the panel stays open.
    pub fn submit<S: DurableSlot>(&mut self, store: &mut CatalogStore<S>) -> Option<CatalogItem> {
        match store.add(&self.draft) {
            Ok(item) => {
                self.error = None;
                self.collapse();
                Some(item)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemorySlot, StaticSeed};
    use crate::error::ValidationError;

    fn store() -> CatalogStore<MemorySlot> {
        CatalogStore::new(MemorySlot::new(), "products", "https://placehold.co/?text=")
    }

    #[test]
    fn test_toggle_switches_panel() {
        let mut form = AddForm::default();
        assert!(!form.is_expanded());

        assert!(form.toggle());
        assert_eq!(form.panel, Panel::Expanded);

        assert!(!form.toggle());
        assert_eq!(form.panel, Panel::Collapsed);
    }

    #[test]
    fn test_expand_clears_error() {
        let mut form = AddForm {
            error: Some("old".to_string()),
            ..Default::default()
        };
        form.expand();
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_collapse_resets_fields() {
        let mut form = AddForm::default();
        form.expand();
        form.draft = ProductDraft::new("A", "1", "d");

        form.collapse();

        assert_eq!(form.draft, ProductDraft::default());
    }

    #[tokio::test]
    async fn test_submit_success_collapses_and_resets() {
        let mut store = store();
        store.initialize(&StaticSeed).await.unwrap();
        let mut form = AddForm::default();
        form.expand();
        form.draft = ProductDraft::new("Sách D", "150000", "Mô tả");

        let item = form.submit(&mut store).expect("valid draft");

        assert_eq!(store.list()[0].id, item.id);
        assert_eq!(form.panel, Panel::Collapsed);
        assert_eq!(form.draft, ProductDraft::default());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_submit_failure_keeps_panel_open() {
        let mut store = store();
        let mut form = AddForm::default();
        form.expand();
        form.draft = ProductDraft::new("A", "0", "d");

        assert!(form.submit(&mut store).is_none());

        assert!(form.is_expanded());
        assert_eq!(form.draft.name, "A");
        assert_eq!(form.error, Some(ValidationError::InvalidPrice.to_string()));
        assert!(store.list().is_empty());
    }
}
