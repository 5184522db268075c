//! Wardrobe Data Model
//!
//! Types shared by the composer, the card view-model and the payload loader:
//! - `Category`: the four slot categories (plus `Other` for anything else the backend sends)
//! - `StyleKey`: an item's style group, with an explicit `Unspecified` alternative
//! - `OutfitItem`: one wardrobe entry as delivered by the backend
//! - `CategorizedItems`: ordered items per known category (composer input)
//! - `OutfitSlot`: one assembled outfit with assign-once category fields

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Clothing category of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Top,
    Bottom,
    Shoes,

    /// Accessory
    Extra,

    /// Any category outside the four slot categories (e.g. "OUTER").
    /// Never placed into a slot.
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Slot categories in placement order
    pub const ALL: [Category; 4] = [Category::Top, Category::Bottom, Category::Shoes, Category::Extra];

    /// Parse a backend category key. Only the four slot categories are recognised.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "TOP" => Some(Category::Top),
            "BOTTOM" => Some(Category::Bottom),
            "SHOES" => Some(Category::Shoes),
            "EXTRA" => Some(Category::Extra),
            _ => None,
        }
    }

    /// Backend key for this category
    pub fn key(&self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Bottom => "BOTTOM",
            Category::Shoes => "SHOES",
            Category::Extra => "EXTRA",
            Category::Other => "OTHER",
        }
    }

    /// Caption shown under a card cell
    pub fn caption(&self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Shoes => "Shoes",
            Category::Extra => "Accessory",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Style group an item belongs to
///
/// Items without a style form their own group. It is kept as a separate
/// variant so a real style literally called "UNSPECIFIED" never merges with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    Named(String),
    Unspecified,
}

impl StyleKey {
    /// Wire name used for the unspecified group
    pub const UNSPECIFIED_KEY: &'static str = "UNSPECIFIED";

    /// Style key of a raw style tag. Missing and empty tags are unspecified.
    pub fn from_style(style: Option<&str>) -> Self {
        match style {
            Some(s) if !s.is_empty() => StyleKey::Named(s.to_string()),
            _ => StyleKey::Unspecified,
        }
    }

    /// Style key of an item
    pub fn of(item: &OutfitItem) -> Self {
        Self::from_style(item.style.as_deref())
    }

    pub fn named(style: impl Into<String>) -> Self {
        StyleKey::Named(style.into())
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, StyleKey::Unspecified)
    }

    /// Whether `item` belongs to this group (compares without allocating)
    pub fn matches(&self, item: &OutfitItem) -> bool {
        match (self, item.style.as_deref()) {
            (StyleKey::Named(name), Some(style)) => name == style,
            (StyleKey::Unspecified, None) | (StyleKey::Unspecified, Some("")) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StyleKey::Named(name) => name,
            StyleKey::Unspecified => Self::UNSPECIFIED_KEY,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A wardrobe entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub cloth_name: String,

    /// Opaque image reference, passed through to renderers
    #[serde(default)]
    pub image_url: String,

    /// Informational only; placement uses the key an item arrived under
    #[serde(default)]
    pub category: Category,

    /// Usage style tag (e.g. "CASUAL_DAILY"); absent for unstyled items
    #[serde(default)]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Lower bound of the comfortable feels-like range (inclusive)
    #[serde(default)]
    pub min_feels_like: Option<f64>,

    /// Upper bound of the comfortable feels-like range (inclusive)
    #[serde(default)]
    pub max_feels_like: Option<f64>,
}

impl OutfitItem {
    pub fn new(cloth_name: impl Into<String>, category: Category) -> Self {
        Self {
            id: None,
            cloth_name: cloth_name.into(),
            image_url: String::new(),
            category,
            style: None,
            material: None,
            min_feels_like: None,
            max_feels_like: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Set both comfortable-range bounds
    pub fn with_range(mut self, min_feels_like: f64, max_feels_like: f64) -> Self {
        self.min_feels_like = Some(min_feels_like);
        self.max_feels_like = Some(max_feels_like);
        self
    }
}

/// Raw backend shape: category key -> item list (lists may be null)
pub type RawOutfitMap = FxHashMap<String, Option<Vec<OutfitItem>>>;

/// Composer input: ordered items for each slot category
///
/// Sequence order is placement priority. Keys outside the four slot
/// categories are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawOutfitMap")]
pub struct CategorizedItems {
    items: FxHashMap<Category, Vec<OutfitItem>>,
}

impl CategorizedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a backend `category key -> items` map
    pub fn from_raw<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<OutfitItem>)>,
        K: AsRef<str>,
    {
        let mut categorized = Self::new();
        for (key, items) in raw {
            match Category::from_key(key.as_ref()) {
                Some(category) => categorized.items.entry(category).or_default().extend(items),
                None => tracing::trace!(
                    "Ignoring {} items under unknown category '{}'",
                    items.len(),
                    key.as_ref()
                ),
            }
        }
        categorized
    }

    /// Append one item to a category. Items for `Category::Other` are dropped.
    pub fn push(&mut self, category: Category, item: OutfitItem) {
        if category == Category::Other {
            return;
        }
        self.items.entry(category).or_default().push(item);
    }

    /// Builder-style append of a whole sequence
    pub fn with_items(mut self, category: Category, items: impl IntoIterator<Item = OutfitItem>) -> Self {
        for item in items {
            self.push(category, item);
        }
        self
    }

    /// Items of a category in sequence order (empty if none)
    pub fn items(&self, category: Category) -> &[OutfitItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of items across categories
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RawOutfitMap> for CategorizedItems {
    fn from(raw: RawOutfitMap) -> Self {
        Self::from_raw(raw.into_iter().map(|(key, items)| (key, items.unwrap_or_default())))
    }
}

/// One assembled outfit: at most one item per slot category
///
/// Fields are assign-once; `fill` never replaces an occupied slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutfitSlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<OutfitItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bottom: Option<OutfitItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shoes: Option<OutfitItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<OutfitItem>,
}

impl OutfitSlot {
    pub fn top(&self) -> Option<&OutfitItem> {
        self.top.as_ref()
    }

    pub fn bottom(&self) -> Option<&OutfitItem> {
        self.bottom.as_ref()
    }

    pub fn shoes(&self) -> Option<&OutfitItem> {
        self.shoes.as_ref()
    }

    pub fn extra(&self) -> Option<&OutfitItem> {
        self.extra.as_ref()
    }

    /// Item occupying `category`, if any
    pub fn get(&self, category: Category) -> Option<&OutfitItem> {
        match category {
            Category::Top => self.top(),
            Category::Bottom => self.bottom(),
            Category::Shoes => self.shoes(),
            Category::Extra => self.extra(),
            Category::Other => None,
        }
    }

    pub fn is_filled(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Place a copy of `item` into `category` if that slot is still empty.
    ///
    /// Returns true if the item was placed.
    pub fn fill(&mut self, category: Category, item: &OutfitItem) -> bool {
        let field = match category {
            Category::Top => &mut self.top,
            Category::Bottom => &mut self.bottom,
            Category::Shoes => &mut self.shoes,
            Category::Extra => &mut self.extra,
            Category::Other => return false,
        };
        if field.is_some() {
            return false;
        }
        *field = Some(item.clone());
        true
    }

    /// Number of occupied slots
    pub fn filled_count(&self) -> usize {
        Category::ALL.iter().filter(|c| self.is_filled(**c)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_key_from_style() {
        assert_eq!(StyleKey::from_style(Some("CASUAL_DAILY")), StyleKey::named("CASUAL_DAILY"));
        assert_eq!(StyleKey::from_style(None), StyleKey::Unspecified);
        assert_eq!(StyleKey::from_style(Some("")), StyleKey::Unspecified);
    }

    #[test]
    fn test_literal_unspecified_style_is_named() {
        let item = OutfitItem::new("Odd tee", Category::Top).with_style("UNSPECIFIED");
        let key = StyleKey::of(&item);
        assert_eq!(key, StyleKey::named("UNSPECIFIED"));
        assert_ne!(key, StyleKey::Unspecified);
        assert!(!StyleKey::Unspecified.matches(&item));
    }

    #[test]
    fn test_style_key_matches() {
        let styled = OutfitItem::new("Loafers", Category::Shoes).with_style("FORMAL_OFFICE");
        let plain = OutfitItem::new("Slides", Category::Shoes);
        assert!(StyleKey::named("FORMAL_OFFICE").matches(&styled));
        assert!(!StyleKey::named("CASUAL_DAILY").matches(&styled));
        assert!(StyleKey::Unspecified.matches(&plain));
        assert!(!StyleKey::Unspecified.matches(&styled));
    }

    #[test]
    fn test_slot_fill_is_assign_once() {
        let first = OutfitItem::new("Oxford shirt", Category::Top);
        let second = OutfitItem::new("Hoodie", Category::Top);
        let mut slot = OutfitSlot::default();

        assert!(slot.fill(Category::Top, &first));
        assert!(!slot.fill(Category::Top, &second));
        assert_eq!(slot.top().map(|i| i.cloth_name.as_str()), Some("Oxford shirt"));
        assert_eq!(slot.filled_count(), 1);
    }

    #[test]
    fn test_slot_ignores_other_category() {
        let coat = OutfitItem::new("Trench coat", Category::Other);
        let mut slot = OutfitSlot::default();
        assert!(!slot.fill(Category::Other, &coat));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_from_raw_drops_unknown_keys() {
        let raw = vec![
            ("TOP".to_string(), vec![OutfitItem::new("Tee", Category::Top)]),
            ("OUTER".to_string(), vec![OutfitItem::new("Parka", Category::Other)]),
        ];
        let items = CategorizedItems::from_raw(raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items.items(Category::Top).len(), 1);
        assert!(items.items(Category::Other).is_empty());
    }

    #[test]
    fn test_deserialize_backend_map() {
        let json = r#"{
            "TOP": [{"clothName": "Linen shirt", "imageUrl": "a.png", "category": "TOP",
                     "style": "CASUAL_DAILY", "material": null,
                     "minFeelsLike": 18.0, "maxFeelsLike": 28.0, "id": 7}],
            "SHOES": null,
            "OUTER": [{"clothName": "Parka", "category": "OUTER"}]
        }"#;
        let items: CategorizedItems = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);

        let shirt = &items.items(Category::Top)[0];
        assert_eq!(shirt.id, Some(7));
        assert_eq!(shirt.style.as_deref(), Some("CASUAL_DAILY"));
        assert_eq!(shirt.min_feels_like, Some(18.0));
        assert!(items.items(Category::Shoes).is_empty());
    }

    #[test]
    fn test_unknown_item_category_parses_as_other() {
        let item: OutfitItem =
            serde_json::from_str(r#"{"clothName": "Parka", "category": "OUTER"}"#).unwrap();
        assert_eq!(item.category, Category::Other);
        assert_eq!(item.min_feels_like, None);
    }

    #[test]
    fn test_missing_item_category_does_not_fail_payload() {
        let json = r#"{"TOP": [{"clothName": "Tee"}, {"clothName": "Knit", "category": "TOP"}]}"#;
        let items: CategorizedItems = serde_json::from_str(json).unwrap();

        let tops = items.items(Category::Top);
        assert_eq!(tops.len(), 2);
        assert_eq!(tops[0].category, Category::Other);
        assert_eq!(tops[1].category, Category::Top);
    }

    #[test]
    fn test_is_unspecified() {
        assert!(StyleKey::from_style(Some("")).is_unspecified());
        assert!(!StyleKey::named("UNSPECIFIED").is_unspecified());
    }
}
