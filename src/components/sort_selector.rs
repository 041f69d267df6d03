//! Sort Selector Component

use leptos::prelude::*;

use crate::models::SortKey;

/// `<select>` over every sort key
#[component]
pub fn SortSelector(
    #[prop(into)] current: Signal<SortKey>,
    #[prop(into)] on_change: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            aria-label="Sắp xếp"
            prop:value=move || current.get().as_str()
            on:change=move |ev| on_change.run(SortKey::from_str(&event_target_value(&ev)))
        >
            {SortKey::ALL.iter().map(|key| view! {
                <option value=key.as_str()>{key.label()}</option>
            }).collect_view()}
        </select>
    }
}
