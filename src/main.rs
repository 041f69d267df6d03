#![allow(warnings)]
//! Book Catalog Frontend Entry Point

mod app;
mod catalog;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod form;
mod logging;
mod models;
mod store;

use app::App;
use config::CatalogConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = CatalogConfig::from_document();
    log::set_max_level(config.level_filter());
    log::info!("Starting catalog with storage key '{}'", config.storage_key);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
