//! Add Product Form Component
//!
//! Collapsible panel for adding a product. Panel transitions and validation
//! live in `form::AddForm`; this component only wires DOM events to it.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::ProductDraft;
use crate::store;

/// Which draft field an input edits
#[derive(Clone, Copy)]
enum Field {
    Name,
    Price,
    Description,
    ImageUrl,
}

impl Field {
    fn value(self, draft: &ProductDraft) -> String {
        match self {
            Field::Name => draft.name.clone(),
            Field::Price => draft.price.clone(),
            Field::Description => draft.description.clone(),
            Field::ImageUrl => draft.image_url.clone(),
        }
    }

    fn set(self, draft: &mut ProductDraft, value: String) {
        match self {
            Field::Name => draft.name = value,
            Field::Price => draft.price = value,
            Field::Description => draft.description = value,
            Field::ImageUrl => draft.image_url = value,
        }
    }
}

#[component]
pub fn AddProductForm() -> impl IntoView {
    let ctx = use_app_context();
    let view_store = ctx.view;
    let name_ref = NodeRef::<Input>::new();

    // Hidden while the catalog is loading or failed to load
    let enabled = move || ctx.can_add();
    let expanded = move || enabled() && store::store_with_form(&view_store, |f| f.is_expanded());
    let error = move || store::store_with_form(&view_store, |f| f.error.clone());
    let field_value = move |field: Field| store::store_with_form(&view_store, |f| field.value(&f.draft));
    let set_field = move |field: Field, value: String| {
        store::store_update_form(&view_store, |f| field.set(&mut f.draft, value));
    };

    // Focus once the panel is visible
    let focus_name = move || {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Some(input) = name_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    let toggle = move |_| {
        if store::store_update_form(&view_store, |f| f.toggle()) {
            focus_name();
        }
    };

    let cancel = move |_| {
        store::store_update_form(&view_store, |f| f.collapse());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(item) = ctx.submit_form() {
            log::info!("Added product #{} '{}'", item.id, item.name);
        }
    };

    view! {
        <div class="add-product">
            <button
                id="toggle-add-form-btn"
                type="button"
                class="toggle-btn"
                aria-expanded=move || expanded().to_string()
                disabled=move || !enabled()
                on:click=toggle
            >
                {move || if expanded() { "Đóng" } else { "+ Thêm sản phẩm" }}
            </button>

            <section id="add-product-section" class="add-product-section" class:visible=expanded>
                <form id="add-product-form" on:submit=submit>
                    <label for="p-name">"Tên sản phẩm *"</label>
                    <input
                        id="p-name"
                        type="text"
                        node_ref=name_ref
                        prop:value=move || field_value(Field::Name)
                        on:input=move |ev| set_field(Field::Name, event_target_value(&ev))
                    />

                    <label for="p-price">"Giá *"</label>
                    <input
                        id="p-price"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || field_value(Field::Price)
                        on:input=move |ev| set_field(Field::Price, event_target_value(&ev))
                    />

                    <label for="p-desc">"Mô tả *"</label>
                    <textarea
                        id="p-desc"
                        prop:value=move || field_value(Field::Description)
                        on:input=move |ev| set_field(Field::Description, event_target_value(&ev))
                    ></textarea>

                    <label for="p-img">"Ảnh (URL)"</label>
                    <input
                        id="p-img"
                        type="url"
                        prop:value=move || field_value(Field::ImageUrl)
                        on:input=move |ev| set_field(Field::ImageUrl, event_target_value(&ev))
                    />

                    <p id="error-message" class="error-message" role="alert">
                        {move || error().unwrap_or_default()}
                    </p>

                    <div class="form-actions">
                        <button type="submit">"Thêm"</button>
                        <button id="cancel-btn" type="button" class="cancel-btn" on:click=cancel>
                            "Hủy"
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
