//! Remote Seed Fetch
//!
//! `SeedSource` that GETs a JSON array of `{name, price, desc, imgUrl}`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::catalog::SeedSource;
use crate::error::LoadError;
use crate::models::ProductRecord;

#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError> {
        let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| LoadError::Network(format!("{:?}", e)))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| LoadError::Network("fetch did not return a Response".to_string()))?;
        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let json = response.json().map_err(|e| LoadError::Decode(format!("{:?}", e)))?;
        let json = JsFuture::from(json)
            .await
            .map_err(|e| LoadError::Decode(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| LoadError::Decode(e.to_string()))
    }
}
