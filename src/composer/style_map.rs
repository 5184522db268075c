//! Style Map
//!
//! Output table of the composer: style key -> assembled outfit slot.
//! Keeps first-discovery order so renderers show styles in a stable order,
//! with an FxHashMap index for O(1) lookups.

use crate::model::{OutfitSlot, StyleKey};
use rustc_hash::FxHashMap;
use serde::ser::{Error, Serialize, SerializeMap, Serializer};

/// Insertion-ordered map from style key to outfit slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(StyleKey, OutfitSlot)>,
    index: FxHashMap<StyleKey, usize>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, style: &StyleKey) -> bool {
        self.index.contains_key(style)
    }

    pub fn get(&self, style: &StyleKey) -> Option<&OutfitSlot> {
        self.index.get(style).map(|&i| &self.entries[i].1)
    }

    /// Slot for a named style (convenience for lookups by raw tag)
    pub fn get_named(&self, style: &str) -> Option<&OutfitSlot> {
        self.get(&StyleKey::named(style))
    }

    /// Slot for `style`, inserting an empty one at the end if absent
    pub fn slot_mut(&mut self, style: &StyleKey) -> &mut OutfitSlot {
        let i = match self.index.get(style) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((style.clone(), OutfitSlot::default()));
                self.index.insert(style.clone(), i);
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Remove a style group with all of its slots
    pub fn remove(&mut self, style: &StyleKey) -> Option<OutfitSlot> {
        let i = self.index.remove(style)?;
        let (_, slot) = self.entries.remove(i);
        for (_, pos) in self.index.iter_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(slot)
    }

    pub fn keys(&self) -> impl Iterator<Item = &StyleKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &OutfitSlot)> {
        self.entries.iter().map(|(k, s)| (k, s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&StyleKey, &mut OutfitSlot)> {
        self.entries.iter_mut().map(|(k, s)| (&*k, s))
    }
}

impl StyleMap {
    /// Whether a style literally named "UNSPECIFIED" sits next to the
    /// unspecified group. Both would use the same JSON key.
    pub fn has_key_collision(&self) -> bool {
        self.keys().any(StyleKey::is_unspecified) && self.get_named(StyleKey::UNSPECIFIED_KEY).is_some()
    }
}

/// Ordered JSON object keyed by style. Fails instead of writing a duplicate
/// "UNSPECIFIED" key.
impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.has_key_collision() {
            return Err(S::Error::custom(format!(
                "style '{}' collides with the unspecified group",
                StyleKey::UNSPECIFIED_KEY
            )));
        }
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (style, slot) in &self.entries {
            map.serialize_entry(style, slot)?;
        }
        map.end()
    }
}
