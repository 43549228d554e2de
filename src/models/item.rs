use serde::{Deserialize, Serialize};

/// Core inventory record. The identifier lives in the inventory key, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, brand: Option<&str>) -> Self {
        Self {
            name: name.into(),
            price,
            brand: brand.map(str::to_string),
        }
    }

    /// Merge a partial update field by field. `None` leaves the stored value alone.
    pub fn apply_patch(&mut self, patch: UpdateItem) {
        if let Some(name) = patch.name {
            if name != self.name {
                self.name = name;
            }
        }
        if let Some(price) = patch.price {
            if price != self.price {
                self.price = price;
            }
        }
        if let Some(brand) = patch.brand {
            if self.brand.as_deref() != Some(brand.as_str()) {
                self.brand = Some(brand);
            }
        }
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
}

// ── Response payloads ────────────────────────────────────────────────────────

/// Entry returned by create/generate. The id is numeric on these routes.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedItem {
    pub item_id: u64,
    pub item: Item,
}

/// Entry returned by name search and update, keyed by the string id.
#[derive(Debug, Clone, Serialize)]
pub struct ItemEntry {
    pub item_id: String,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct GeneratedItems {
    pub message: String,
    pub generated_items: Vec<CreatedItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item::new("Widget", 10.0, Some("Brand A"))
    }

    #[test]
    fn empty_patch_leaves_item_identical() {
        let mut item = widget();
        item.apply_patch(UpdateItem::default());
        assert_eq!(item, widget());
    }

    #[test]
    fn price_patch_only_touches_price() {
        let mut item = widget();
        item.apply_patch(UpdateItem {
            price: Some(9.99),
            ..Default::default()
        });
        assert_eq!(item.name, "Widget");
        assert_eq!(item.brand.as_deref(), Some("Brand A"));
        assert_eq!(item.price, 9.99);
    }

    #[test]
    fn brand_patch_fills_missing_brand() {
        let mut item = Item::new("Gadget", 1.5, None);
        item.apply_patch(UpdateItem {
            brand: Some("Brand C".to_string()),
            ..Default::default()
        });
        assert_eq!(item.brand.as_deref(), Some("Brand C"));
    }

    #[test]
    fn name_match_ignores_case() {
        let item = Item::new("Random Item 12", 3.0, None);
        assert!(item.name_contains("item 1"));
        assert!(!item.name_contains("item 3"));
    }

    #[test]
    fn missing_brand_deserializes_as_none() {
        let item: Item = serde_json::from_str(r#"{"name":"Bolt","price":2}"#).unwrap();
        assert_eq!(item, Item::new("Bolt", 2.0, None));
    }

    #[test]
    fn item_without_brand_serializes_null() {
        let json = serde_json::to_value(Item::new("Bolt", 2.0, None)).unwrap();
        assert_eq!(json["brand"], serde_json::Value::Null);
    }
}
