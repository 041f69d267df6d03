//! Catalog Store
//!
//! The authoritative product list for a session. Owns its durable slot;
//! every mutation rewrites the whole serialized list under one key.

use std::collections::HashSet;

use log::{debug, error, info, warn};

use crate::catalog::format::placeholder_url;
use crate::catalog::seed::SeedSource;
use crate::catalog::slot::DurableSlot;
use crate::error::{LoadError, StorageError, StorageResult, ValidationError};
use crate::models::{CatalogItem, ProductDraft, ProductRecord, RawPrice};

/// Parse a price typed by the user or read from a record.
/// Accepts only finite numbers greater than zero.
pub fn parse_price(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn record_price(price: &RawPrice) -> Option<f64> {
    match price {
        RawPrice::Number(n) => (n.is_finite() && *n > 0.0).then_some(*n),
        RawPrice::Text(t) => parse_price(t),
    }
}

/// In-memory catalog backed by a durable slot
#[derive(Debug)]
pub struct CatalogStore<S> {
    slot: S,
    key: String,
    placeholder_base: String,
    items: Vec<CatalogItem>,
    /// `None` once the id space is exhausted
    next_id: Option<u64>,
    initialized: bool,
    /// Waiting for the seed source; mutations are refused meanwhile
    seeding: bool,
}

impl<S: DurableSlot> CatalogStore<S> {
    pub fn new(slot: S, key: impl Into<String>, placeholder_base: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
            placeholder_base: placeholder_base.into(),
            items: Vec::new(),
            next_id: Some(1),
            initialized: false,
            seeding: false,
        }
    }

    /// Restore the catalog from the durable slot, or seed it on first use.
    ///
    /// A seed failure leaves the store empty but initialized; the error is
    /// returned so the caller can show it. Runs at most once per store.
    pub async fn initialize<Seed>(&mut self, seed: &Seed) -> Result<(), LoadError>
    where
        Seed: SeedSource + ?Sized,
    {
        if self.initialized || self.restore() {
            return Ok(());
        }
        let records = seed.fetch().await;
        self.finish_seed(records)
    }

    /// First half of `initialize`: adopt the cached list if there is one.
    /// Returns `false` when the seed is needed; until `finish_seed` runs,
    /// `add` and `remove` are refused.
    pub fn restore(&mut self) -> bool {
        if self.initialized {
            return !self.seeding;
        }
        self.initialized = true;

        let Some(records) = self.read_cache() else {
            self.seeding = true;
            return false;
        };
        let total = records.len();
        let changed = self.adopt(records);
        info!("Restored {} products from '{}'", self.items.len(), self.key);
        if changed {
            debug!("Normalized {} cached records, rewriting cache", total);
            self.persist();
        }
        true
    }

    /// Second half of `initialize`: adopt the seed result
    pub fn finish_seed(
        &mut self,
        records: Result<Vec<ProductRecord>, LoadError>,
    ) -> Result<(), LoadError> {
        if !self.seeding {
            return Ok(());
        }
        self.seeding = false;
        match records {
            Ok(records) => {
                self.adopt(records);
                info!("Seeded {} products", self.items.len());
                self.persist();
                Ok(())
            }
            Err(e) => {
                error!("Could not fetch initial products: {}", e);
                self.items.clear();
                Err(e)
            }
        }
    }

    /// Validate and prepend a new product
    pub fn add(&mut self, draft: &ProductDraft) -> Result<CatalogItem, ValidationError> {
        if self.seeding {
            return Err(ValidationError::NotReady);
        }
        let name = draft.name.trim();
        let price = draft.price.trim();
        let description = draft.description.trim();
        if name.is_empty() || price.is_empty() || description.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let price = parse_price(price).ok_or(ValidationError::InvalidPrice)?;

        let image_url = match draft.image_url.trim() {
            "" => placeholder_url(&self.placeholder_base, name),
            url => url.to_string(),
        };
        let id = self.allocate_id().ok_or(ValidationError::CatalogFull)?;
        let item = CatalogItem {
            id,
            name: name.to_string(),
            price,
            description: description.to_string(),
            image_url,
        };
        self.items.insert(0, item.clone());
        self.persist();
        debug!("Added product #{} '{}'", item.id, item.name);
        Ok(item)
    }

    /// Remove the product with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.seeding {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        self.persist();
        if removed {
            debug!("Removed product #{}", id);
        }
        removed
    }

    pub fn list(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_seeding(&self) -> bool {
        self.seeding
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Cached records, or `None` when the slot is empty, unreadable or holds
    /// an empty list
    fn read_cache(&self) -> Option<Vec<ProductRecord>> {
        let raw = match self.slot.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };
        match serde_json::from_str::<Vec<ProductRecord>>(&raw) {
            Ok(records) if records.is_empty() => None,
            Ok(records) => Some(records),
            Err(e) => {
                warn!("Ignoring unreadable cache under '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Replace the list with `records`, assigning ids where missing or
    /// duplicated. Returns whether anything had to be normalized.
    fn adopt(&mut self, records: Vec<ProductRecord>) -> bool {
        self.next_id = records
            .iter()
            .filter_map(|r| r.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        let mut seen = HashSet::new();
        let mut changed = false;
        self.items = Vec::with_capacity(records.len());

        for record in records {
            let name = record.name.trim();
            let price = match record_price(&record.price) {
                Some(price) if !name.is_empty() => price,
                _ => {
                    warn!("Skipping invalid product record '{}'", record.name);
                    changed = true;
                    continue;
                }
            };
            let id = match record.id {
                Some(id) if seen.insert(id) => id,
                _ => {
                    changed = true;
                    match self.allocate_id() {
                        Some(id) => {
                            seen.insert(id);
                            id
                        }
                        None => {
                            warn!("No ids left, skipping product record '{}'", record.name);
                            continue;
                        }
                    }
                }
            };
            if !matches!(record.price, RawPrice::Number(_)) {
                changed = true;
            }
            self.items.push(CatalogItem {
                id,
                name: name.to_string(),
                price,
                description: record.desc,
                image_url: record.img_url,
            });
        }
        changed
    }

    fn allocate_id(&mut self) -> Option<u64> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    fn persist(&mut self) {
        if let Err(e) = self.write_all() {
            warn!("Catalog kept in memory only: {}", e);
        }
    }

    fn write_all(&mut self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.items)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.slot.set(&self.key, &json)
    }
}
