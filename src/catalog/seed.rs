//! Seed Sources
//!
//! Where the catalog comes from when the durable slot is empty.
//! `commands::fetch::HttpSeedSource` is the remote one.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::models::{ProductRecord, RawPrice};

/// Provides the default product list on first use
#[async_trait(?Send)]
pub trait SeedSource {
    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError>;
}

/// Built-in default books
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSeed;

const DEFAULT_BOOKS: &[(&str, &str, &str, &str)] = &[
    (
        "Sách C: Tư duy phản biện",
        "110000",
        "Hướng dẫn phát triển tư duy phản biện và ra quyết định sáng suốt.",
        "images/book1.png",
    ),
    (
        "Sách B: Kỹ năng học tập hiệu quả",
        "95000",
        "Mẹo và phương pháp giúp tối ưu hóa thời gian và cải thiện kết quả học tập.",
        "images/book2.png",
    ),
    (
        "Sách A: Lập trình cho người mới bắt đầu",
        "120000",
        "Cuốn sách nhập môn giúp bạn nắm vững các khái niệm cơ bản về lập trình.",
        "images/book3.jpg",
    ),
];

#[async_trait(?Send)]
impl SeedSource for StaticSeed {
    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError> {
        Ok(DEFAULT_BOOKS
            .iter()
            .map(|(name, price, desc, img_url)| ProductRecord {
                id: None,
                name: name.to_string(),
                price: RawPrice::Text(price.to_string()),
                desc: desc.to_string(),
                img_url: img_url.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_seed_has_default_books() {
        let records = StaticSeed.fetch().await.expect("static seed never fails");
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.id.is_none()));
        assert!(records[2].name.starts_with("Sách A"));
    }
}
