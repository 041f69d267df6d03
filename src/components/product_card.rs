//! Product Card Component
//!
//! One display block per product with its delete affordance.

use leptos::prelude::*;

use crate::catalog::{format_price, image_src};
use crate::context::use_app_context;
use crate::models::CatalogItem;

/// Product card
///
/// # Arguments
/// * `item` - Product to show
/// * `on_delete` - Called with the product id; the card never mutates the catalog
#[component]
pub fn ProductCard(
    item: CatalogItem,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let src = image_src(&ctx.placeholder_base(), &item.name, &item.image_url);
    let price = format_price(item.price, &ctx.currency_suffix());
    let alt = format!("Bìa minh họa {}", item.name);

    view! {
        <article class="product-item">
            <img class="product-image" src=src alt=alt />
            <div class="product-content">
                <h3 class="product-name">{item.name}</h3>
                <p class="product-desc">{item.description}</p>
                <p class="product-price">{price}</p>
            </div>
            <button
                type="button"
                class="delete-btn"
                title="Xóa sản phẩm"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(id);
                }
            >
                "×"
            </button>
        </article>
    }
}
