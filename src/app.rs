//! Catalog App
//!
//! Root component: builds the context, loads the catalog once on mount and
//! wires user events to catalog mutations.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use reactive_stores::Store;

use crate::catalog::{SeedSource, StaticSeed};
use crate::commands::{self, HttpSeedSource};
use crate::components::{AddProductForm, ProductList, SearchBar};
use crate::config::{CatalogConfig, SeedConfig};
use crate::context::AppContext;
use crate::models::LoadState;
use crate::store::{self, ViewState};

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let view_store = Store::new(ViewState::default());
    provide_context(view_store);
    let ctx = AppContext::new(config, view_store);
    provide_context(ctx);

    // Load the catalog on mount, into the one store held by the context
    Effect::new(move |_| {
        let restored = ctx.catalog.try_update_value(|c| c.restore()).unwrap_or(false);
        if restored {
            store::store_set_load(&view_store, LoadState::Ready);
            ctx.refresh();
            return;
        }
        let seed = ctx.config.with_value(|c| c.seed.clone());
        spawn_local(async move {
            let records = match &seed {
                SeedConfig::Remote { url } => HttpSeedSource::new(url.clone()).fetch().await,
                SeedConfig::Static => StaticSeed.fetch().await,
            };
            let result = ctx
                .catalog
                .try_update_value(|c| c.finish_seed(records))
                .unwrap_or(Ok(()));
            info!("Loaded {} products", ctx.catalog.with_value(|c| c.list().len()));
            match result {
                Ok(()) => store::store_set_load(&view_store, LoadState::Ready),
                Err(e) => store::store_set_load(&view_store, LoadState::Failed(e.to_string())),
            }
            ctx.refresh();
        });
    });

    let visible = Memo::new(move |_| ctx.visible());
    let load = Signal::derive(move || store::store_load(&view_store));

    let on_delete = Callback::new(move |id: u64| ctx.remove(id, commands::confirm));

    view! {
        <main class="catalog">
            <h1>"Danh mục sản phẩm"</h1>

            <SearchBar />

            <AddProductForm />

            <ProductList items=visible load=load on_delete=on_delete />

            <p class="item-count">
                {move || format!("{} / {} sản phẩm", visible.with(|v| v.len()), ctx.total())}
            </p>
        </main>
    }
}
