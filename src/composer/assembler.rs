//! Slot Assembler
//!
//! Places items into per-style outfit slots in two passes over the fixed
//! category order (TOP, BOTTOM, SHOES, EXTRA), each walking items in their
//! given sequence order:
//!
//! 1. `place_temperature_matches`: only items whose comfortable range covers
//!    the reference temperature; first item wins each (style, category) slot.
//! 2. `backfill`: every item regardless of temperature, filling whatever the
//!    first pass left empty.
//!
//! A temperature-appropriate item is therefore preferred, but a category is
//! never left empty for a style that owns any item of that category.

use super::style_map::StyleMap;
use super::temperature::is_temp_match;
use crate::model::{CategorizedItems, Category, OutfitItem, StyleKey};

/// Builder that owns the style map while the two placement passes run
pub struct SlotAssembler<'a> {
    items: &'a CategorizedItems,
    feels_like: Option<f64>,
    map: StyleMap,
}

impl<'a> SlotAssembler<'a> {
    pub fn new(items: &'a CategorizedItems, feels_like: Option<f64>) -> Self {
        Self {
            items,
            feels_like,
            map: StyleMap::new(),
        }
    }

    /// First pass: place temperature-matching items. Returns the number placed.
    pub fn place_temperature_matches(&mut self) -> usize {
        let items = self.items;
        let mut placed = 0;
        for category in Category::ALL {
            for item in items.items(category) {
                if is_temp_match(item, self.feels_like) && self.place(category, item) {
                    placed += 1;
                }
            }
        }
        tracing::debug!("Temperature pass placed {} items", placed);
        placed
    }

    /// Second pass: fill remaining empty slots ignoring temperature.
    /// Returns the number placed.
    pub fn backfill(&mut self) -> usize {
        let items = self.items;
        let mut placed = 0;
        for category in Category::ALL {
            for item in items.items(category) {
                if self.place(category, item) {
                    placed += 1;
                }
            }
        }
        tracing::debug!("Backfill pass placed {} items", placed);
        placed
    }

    pub fn finish(self) -> StyleMap {
        self.map
    }

    fn place(&mut self, category: Category, item: &OutfitItem) -> bool {
        let style = StyleKey::of(item);
        if let Some(slot) = self.map.get(&style) {
            if slot.is_filled(category) {
                return false;
            }
        }
        self.map.slot_mut(&style).fill(category, item)
    }
}

/// Run both placement passes and return the assembled style map
pub fn assemble(items: &CategorizedItems, feels_like: Option<f64>) -> StyleMap {
    let mut assembler = SlotAssembler::new(items, feels_like);
    assembler.place_temperature_matches();
    assembler.backfill();
    assembler.finish()
}
