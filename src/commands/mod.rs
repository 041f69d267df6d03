//! Browser Bindings
//!
//! Implementations of the catalog's outside collaborators on top of
//! `web_sys`: local storage, the seed fetch and the confirmation prompt.

mod dialog;
mod fetch;
mod storage;

pub use dialog::*;
pub use fetch::*;
pub use storage::*;
