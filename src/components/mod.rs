//! UI Components
//!
//! Leptos components for the catalog page.

mod add_product_form;
mod product_card;
mod product_list;
mod search_bar;
mod sort_selector;

pub use add_product_form::AddProductForm;
pub use product_card::ProductCard;
pub use product_list::ProductList;
pub use search_bar::SearchBar;
pub use sort_selector::SortSelector;
