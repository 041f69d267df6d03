//! Catalog Core
//!
//! Store, persistence seams and the pure filter/sort/format helpers.
//! Nothing in here touches the DOM, so it is unit-tested natively.

pub mod format;
pub mod seed;
pub mod slot;
pub mod store;
pub mod view_model;

pub use format::{format_price, image_src, placeholder_url};
pub use seed::{SeedSource, StaticSeed};
pub use slot::{DurableSlot, MemorySlot};
pub use store::{parse_price, CatalogStore};
pub use view_model::derive;
