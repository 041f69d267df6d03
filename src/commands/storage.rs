//! Local Storage Slot
//!
//! `DurableSlot` backed by `window.localStorage`.

use crate::catalog::DurableSlot;
use crate::error::{StorageError, StorageResult};

/// Looks up `localStorage` on every access, so it holds no JS handles
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl DurableSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}
