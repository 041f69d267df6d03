//! View Model
//!
//! Pure projection of the store's list into the display list:
//! filter by name, then sort a copy.

use std::cmp::Ordering;

use crate::models::{CatalogItem, SortKey};

/// Locale used for name collation in the browser
#[cfg(target_arch = "wasm32")]
const COLLATION_LOCALE: &str = "vi";

/// Derive the display list from `items`, the search text and the sort key.
/// Never mutates `items`.
pub fn derive(items: &[CatalogItem], query: &str, sort: SortKey) -> Vec<CatalogItem> {
    let query = query.trim().to_lowercase();
    let mut visible: Vec<CatalogItem> = items
        .iter()
        .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    match sort {
        SortKey::None => {}
        SortKey::NameAsc | SortKey::NameDesc => {
            let collator = NameCollator::new();
            visible.sort_by(|a, b| {
                let ord = collator.compare(&a.name, &b.name);
                if sort == SortKey::NameDesc { ord.reverse() } else { ord }
            });
        }
        SortKey::PriceAsc => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    visible
}

/// Locale-aware name ordering. Uses `Intl.Collator` in the browser and a
/// case-folded comparison elsewhere.
struct NameCollator {
    #[cfg(target_arch = "wasm32")]
    compare: Option<js_sys::Function>,
}

impl NameCollator {
    #[cfg(target_arch = "wasm32")]
    fn new() -> Self {
        let locales = js_sys::Array::of1(&COLLATION_LOCALE.into());
        let collator = js_sys::Intl::Collator::new(&locales, &js_sys::Object::new());
        Self {
            compare: Some(collator.compare()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn new() -> Self {
        Self {}
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(compare) = &self.compare {
                let result = compare
                    .call2(&wasm_bindgen::JsValue::UNDEFINED, &a.into(), &b.into())
                    .ok()
                    .and_then(|v| v.as_f64());
                if let Some(n) = result {
                    return n.partial_cmp(&0.0).unwrap_or(Ordering::Equal);
                }
            }
        }
        folded_cmp(a, b)
    }
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, price: f64) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            price,
            description: String::new(),
            image_url: String::new(),
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item(1, "Sách C: Tư duy phản biện", 110000.0),
            item(2, "sách B: Kỹ năng học tập", 95000.0),
            item(3, "Sách A: Lập trình", 120000.0),
            item(4, "Bút bi", 5000.0),
            item(5, "Sổ tay", 95000.0),
        ]
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let items = sample();
        assert_eq!(derive(&items, "", SortKey::None), items);
        assert_eq!(derive(&items, "   ", SortKey::None), items);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = sample();
        let result = derive(&items, "  SÁCH ", SortKey::None);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|i| i.name.to_lowercase().contains("sách")));
    }

    #[test]
    fn test_filter_and_sort_scenario() {
        let items = vec![item(1, "Sách A", 10.0), item(2, "Sách B", 20.0)];
        let result = derive(&items, "sách a", SortKey::NameAsc);
        assert_eq!(names(&result), vec!["Sách A"]);
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(derive(&sample(), "không có", SortKey::PriceAsc).is_empty());
    }

    #[test]
    fn test_price_sorts_are_ordered() {
        let items = sample();

        let asc = derive(&items, "", SortKey::PriceAsc);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
        // Equal prices keep their original order.
        let ties: Vec<u64> = asc.iter().filter(|i| i.price == 95000.0).map(|i| i.id).collect();
        assert_eq!(ties, vec![2, 5]);

        let desc = derive(&items, "", SortKey::PriceDesc);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_name_sorts_are_ordered() {
        let items = sample();

        let asc = derive(&items, "", SortKey::NameAsc);
        assert!(asc.windows(2).all(|w| folded_cmp(&w[0].name, &w[1].name) != Ordering::Greater));
        assert_eq!(asc[0].name, "Bút bi");

        let desc = derive(&items, "", SortKey::NameDesc);
        assert!(desc.windows(2).all(|w| folded_cmp(&w[0].name, &w[1].name) != Ordering::Less));
    }

    #[test]
    fn test_derive_does_not_touch_input() {
        let items = sample();
        let copy = items.clone();
        let _ = derive(&items, "s", SortKey::NameDesc);
        assert_eq!(items, copy);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let items = sample();
        assert_eq!(
            derive(&items, "s", SortKey::PriceDesc),
            derive(&items, "s", SortKey::PriceDesc)
        );
    }
}
