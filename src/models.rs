//! Catalog Models
//!
//! Data structures shared by the store, the view model and the components.

use serde::{Deserialize, Serialize};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(rename = "desc")]
    pub description: String,
    /// Empty means the generated placeholder is used
    #[serde(rename = "imgUrl", default)]
    pub image_url: String,
}

/// Raw add-form input, validated by the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
}

impl ProductDraft {
    pub fn new(name: &str, price: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            image_url: String::new(),
        }
    }
}

/// Price as found in cached or seeded JSON: older caches store it as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

/// A product record as it arrives from the cache or the seed source.
/// Seed records carry no `id`; caches written by older pages may not either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub price: RawPrice,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "imgUrl", default)]
    pub img_url: String,
}

/// Sort order offered by the sort selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    /// Value used by the `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Mặc định",
            SortKey::NameAsc => "Tên A → Z",
            SortKey::NameDesc => "Tên Z → A",
            SortKey::PriceAsc => "Giá tăng dần",
            SortKey::PriceDesc => "Giá giảm dần",
        }
    }
}

/// Progress of the initial catalog load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trips_select_values() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
        assert_eq!(SortKey::from_str("bogus"), SortKey::None);
    }

    #[test]
    fn test_record_accepts_text_and_numeric_price() {
        let records: Vec<ProductRecord> = serde_json::from_str(
            r#"[{"name":"X","price":"1000","desc":"d","imgUrl":""},
                {"id":7,"name":"Y","price":250.5,"desc":"e"}]"#,
        )
        .unwrap();

        assert_eq!(records[0].id, None);
        assert_eq!(records[0].price, RawPrice::Text("1000".to_string()));
        assert_eq!(records[1].id, Some(7));
        assert_eq!(records[1].price, RawPrice::Number(250.5));
        assert_eq!(records[1].img_url, "");
    }

    #[test]
    fn test_item_serializes_with_cache_field_names() {
        let item = CatalogItem {
            id: 1,
            name: "A".to_string(),
            price: 10.0,
            description: "d".to_string(),
            image_url: "a.png".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["desc"], "d");
        assert_eq!(json["imgUrl"], "a.png");
        assert_eq!(json["price"], 10.0);
    }
}
