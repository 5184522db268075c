//! Wardrobe Listings
//!
//! Per-category item lists for the plan results view. The backend returns
//! clothing under free-form category keys (OUTER included) and, separately,
//! a list of extras worth bringing along. The same garment may appear several
//! times (once per matching day); clothing lists either collapse duplicates
//! or count them. Extras are always shown exactly as delivered.

use crate::error::Result;
use crate::model::OutfitItem;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Plan results payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanClothes {
    /// Category key -> items, in payload order. Every key is kept.
    #[serde(default)]
    pub clothes: IndexMap<String, Option<Vec<OutfitItem>>>,

    #[serde(default)]
    pub extra_clothes: ExtraClothes,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtraClothes {
    #[serde(rename = "EXTRA", default)]
    pub extra: Option<Vec<OutfitItem>>,
}

impl PlanClothes {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style append of items under a raw category key
    pub fn with_category(mut self, key: impl Into<String>, items: impl IntoIterator<Item = OutfitItem>) -> Self {
        self.clothes
            .entry(key.into())
            .or_default()
            .get_or_insert_with(Vec::new)
            .extend(items);
        self
    }

    pub fn with_extra(mut self, items: impl IntoIterator<Item = OutfitItem>) -> Self {
        self.extra_clothes.extra.get_or_insert_with(Vec::new).extend(items);
        self
    }

    pub fn extra(&self) -> &[OutfitItem] {
        self.extra_clothes.extra.as_deref().unwrap_or(&[])
    }
}

/// How duplicate clothing items are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingMode {
    /// One entry per item id, first occurrence kept
    #[default]
    Unique,

    /// One entry per item id with the number of occurrences
    Aggregated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListedItem {
    pub item: OutfitItem,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    /// Raw category key as sent by the backend
    pub category: String,
    pub entries: Vec<ListedItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub categories: Vec<CategoryListing>,

    /// Extras, untouched by the listing mode
    pub extra: Vec<OutfitItem>,
}

impl Listing {
    pub fn category(&self, key: &str) -> Option<&CategoryListing> {
        self.categories.iter().find(|c| c.category == key)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.entries.is_empty()) && self.extra.is_empty()
    }
}

/// Build the listing for a plan payload
///
/// Categories keep payload order and clothing entries keep first-occurrence
/// order. Items without an id are never merged.
pub fn build_listing(clothes: &PlanClothes, mode: ListingMode) -> Listing {
    let categories = clothes
        .clothes
        .iter()
        .map(|(key, items)| CategoryListing {
            category: key.clone(),
            entries: list_category(items.as_deref().unwrap_or(&[]), mode),
        })
        .collect();

    Listing {
        categories,
        extra: clothes.extra().to_vec(),
    }
}

fn list_category(items: &[OutfitItem], mode: ListingMode) -> Vec<ListedItem> {
    let mut entries: Vec<ListedItem> = Vec::with_capacity(items.len());
    let mut seen: FxHashMap<u64, usize> = FxHashMap::default();

    for item in items {
        let Some(id) = item.id else {
            entries.push(ListedItem { item: item.clone(), count: 1 });
            continue;
        };
        match seen.get(&id) {
            Some(&pos) => {
                if mode == ListingMode::Aggregated {
                    entries[pos].count += 1;
                }
            }
            None => {
                seen.insert(id, entries.len());
                entries.push(ListedItem { item: item.clone(), count: 1 });
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn tee() -> OutfitItem {
        OutfitItem::new("Tee", Category::Top).with_id(1).with_image("tee.png")
    }

    fn umbrella() -> OutfitItem {
        OutfitItem::new("Umbrella", Category::Extra).with_id(9)
    }

    fn plan() -> PlanClothes {
        PlanClothes::default()
            .with_category(
                "TOP",
                [
                    tee(),
                    OutfitItem::new("Shirt", Category::Top).with_id(2),
                    tee(),
                    tee(),
                    OutfitItem::new("Polo", Category::Top),
                    OutfitItem::new("Polo", Category::Top),
                ],
            )
            .with_category("OUTER", [OutfitItem::new("Parka", Category::Other).with_id(1)])
            .with_extra([umbrella(), umbrella()])
    }

    #[test]
    fn test_unique_drops_duplicates() {
        let listing = build_listing(&plan(), ListingMode::Unique);
        let top = listing.category("TOP").unwrap();

        let names: Vec<&str> = top.entries.iter().map(|e| e.item.cloth_name.as_str()).collect();
        assert_eq!(names, vec!["Tee", "Shirt", "Polo", "Polo"]);
        assert!(top.entries.iter().all(|e| e.count == 1));
        assert_eq!(top.entries[0].item.image_url, "tee.png");
    }

    #[test]
    fn test_aggregated_counts_duplicates() {
        let listing = build_listing(&plan(), ListingMode::Aggregated);
        let counts: Vec<usize> = listing.category("TOP").unwrap().entries.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![3, 1, 1, 1]);
    }

    #[test]
    fn test_every_category_key_is_listed() {
        let listing = build_listing(&plan(), ListingMode::Unique);
        let keys: Vec<&str> = listing.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(keys, vec!["TOP", "OUTER"]);

        // Ids are only compared within a category
        let outer = listing.category("OUTER").unwrap();
        assert_eq!(outer.entries.len(), 1);
        assert_eq!(outer.entries[0].item.cloth_name, "Parka");
    }

    #[test]
    fn test_extras_pass_through_unchanged() {
        for mode in [ListingMode::Unique, ListingMode::Aggregated] {
            let listing = build_listing(&plan(), mode);
            assert_eq!(listing.extra, vec![umbrella(), umbrella()]);
        }
    }

    #[test]
    fn test_payload_keeps_key_order_and_null_lists() {
        let json = r#"{
            "clothes": {
                "OUTER": [{"id": 1, "clothName": "Parka", "imageUrl": "p.png", "category": "OUTER",
                           "minFeelsLike": -10, "maxFeelsLike": 5}],
                "TOP": [{"id": 2, "clothName": "Knit", "category": "TOP"}],
                "BOTTOM": null
            },
            "extraClothes": {
                "EXTRA": [{"id": 9, "clothName": "Umbrella", "imageUrl": "u.png", "weather": "RAIN"},
                          {"id": 9, "clothName": "Umbrella", "imageUrl": "u.png", "weather": "RAIN"}]
            }
        }"#;
        let plan = PlanClothes::from_json_str(json).unwrap();
        let listing = build_listing(&plan, ListingMode::Aggregated);

        let keys: Vec<&str> = listing.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(keys, vec!["OUTER", "TOP", "BOTTOM"]);
        assert!(listing.category("BOTTOM").unwrap().entries.is_empty());

        // Extras carry no category field
        assert_eq!(listing.extra.len(), 2);
        assert_eq!(listing.extra[0].category, Category::Other);
    }

    #[test]
    fn test_empty_payload() {
        let listing = build_listing(&PlanClothes::default(), ListingMode::Unique);
        assert!(listing.is_empty());
        assert!(listing.categories.is_empty());
    }
}
