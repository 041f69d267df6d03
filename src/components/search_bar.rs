//! Search Bar Component
//!
//! Search input and sort selector. Both only change view state.

use leptos::prelude::*;

use crate::components::SortSelector;
use crate::models::SortKey;
use crate::store::{self, use_view_store};

#[component]
pub fn SearchBar() -> impl IntoView {
    let view_store = use_view_store();

    view! {
        <div class="search-bar">
            <input
                id="search-input"
                type="search"
                placeholder="Tìm kiếm sản phẩm..."
                prop:value=move || store::store_query(&view_store)
                on:input=move |ev| store::store_set_query(&view_store, event_target_value(&ev))
            />
            <SortSelector
                current=Signal::derive(move || store::store_sort(&view_store))
                on_change=move |sort: SortKey| store::store_set_sort(&view_store, sort)
            />
        </div>
    }
}
