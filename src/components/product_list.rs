//! Product List Component
//!
//! Renders the derived list, or exactly one placeholder: loading,
//! failed to load, or no results.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::models::{CatalogItem, LoadState};

const LOADING_TEXT: &str = "Đang tải sản phẩm...";
const LOAD_FAILED_TEXT: &str = "Lỗi khi tải sản phẩm. Vui lòng thử lại.";
const NO_RESULTS_TEXT: &str = "Không tìm thấy sản phẩm nào.";

/// What the list area shows instead of products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    LoadFailed,
    NoResults,
}

impl Placeholder {
    /// Placeholder for a load state and derived list length, if any
    pub fn pick(load: &LoadState, visible: usize) -> Option<Self> {
        match load {
            LoadState::Loading => Some(Placeholder::Loading),
            LoadState::Failed(_) => Some(Placeholder::LoadFailed),
            LoadState::Ready if visible == 0 => Some(Placeholder::NoResults),
            LoadState::Ready => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Placeholder::Loading => LOADING_TEXT,
            Placeholder::LoadFailed => LOAD_FAILED_TEXT,
            Placeholder::NoResults => NO_RESULTS_TEXT,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Placeholder::Loading => "list-placeholder loading",
            Placeholder::LoadFailed => "list-placeholder load-error",
            Placeholder::NoResults => "list-placeholder no-results",
        }
    }
}

#[component]
pub fn ProductList(
    #[prop(into)] items: Signal<Vec<CatalogItem>>,
    #[prop(into)] load: Signal<LoadState>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let placeholder = move || Placeholder::pick(&load.get(), items.with(|i| i.len()));

    view! {
        <section id="product-list" class="product-list">
            {move || match placeholder() {
                Some(p) => view! { <p class=p.class()>{p.text()}</p> }.into_any(),
                None => view! {
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| view! { <ProductCard item=item on_delete=on_delete /> }
                    />
                }.into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins_over_empty_list() {
        assert_eq!(Placeholder::pick(&LoadState::Loading, 0), Some(Placeholder::Loading));
    }

    #[test]
    fn test_failed_load_is_distinct_from_no_results() {
        let failed = Placeholder::pick(&LoadState::Failed("404".to_string()), 0);
        let empty = Placeholder::pick(&LoadState::Ready, 0);

        assert_eq!(failed, Some(Placeholder::LoadFailed));
        assert_eq!(empty, Some(Placeholder::NoResults));
        assert_ne!(failed.unwrap().text(), empty.unwrap().text());
    }

    #[test]
    fn test_ready_with_items_shows_list() {
        assert_eq!(Placeholder::pick(&LoadState::Ready, 3), None);
    }
}
