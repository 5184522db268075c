//! Shoe Resolver
//!
//! Post-pass over the assembled style map. Any style still missing footwear
//! gets a substitute from the full shoe sequence, trying tiers from ideal to
//! "better than nothing". Footwear is the one category allowed to cross style
//! groups.

use super::style_map::StyleMap;
use super::temperature::is_temp_match;
use crate::model::{Category, OutfitItem, StyleKey};

/// Substitution tiers, tried in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShoeTier {
    /// Same style, comfortable at the reference temperature
    SameStyleTemperature,

    /// Same style, any temperature
    SameStyle,

    /// Any style, comfortable at the reference temperature
    AnyTemperature,

    /// First shoe in the sequence
    Any,
}

impl ShoeTier {
    pub fn all() -> &'static [ShoeTier] {
        &[
            ShoeTier::SameStyleTemperature,
            ShoeTier::SameStyle,
            ShoeTier::AnyTemperature,
            ShoeTier::Any,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            ShoeTier::SameStyleTemperature => "same style, temperature match",
            ShoeTier::SameStyle => "same style",
            ShoeTier::AnyTemperature => "any style, temperature match",
            ShoeTier::Any => "any shoe",
        }
    }

    fn accepts(&self, shoe: &OutfitItem, style: &StyleKey, feels_like: Option<f64>) -> bool {
        match self {
            ShoeTier::SameStyleTemperature => style.matches(shoe) && is_temp_match(shoe, feels_like),
            ShoeTier::SameStyle => style.matches(shoe),
            ShoeTier::AnyTemperature => is_temp_match(shoe, feels_like),
            ShoeTier::Any => true,
        }
    }
}

/// Find the substitute shoe for `style`: first tier with a candidate wins,
/// and within a tier the earliest shoe in sequence order.
pub fn pick_shoe<'s>(
    style: &StyleKey,
    shoes: &'s [OutfitItem],
    feels_like: Option<f64>,
) -> Option<(ShoeTier, &'s OutfitItem)> {
    ShoeTier::all().iter().find_map(|tier| {
        shoes
            .iter()
            .find(|shoe| tier.accepts(shoe, style, feels_like))
            .map(|shoe| (*tier, shoe))
    })
}

/// Fill every empty shoes slot in `map` from `shoes`
///
/// With no shoes at all the slots stay empty.
pub fn resolve_shoes(mut map: StyleMap, shoes: &[OutfitItem], feels_like: Option<f64>) -> StyleMap {
    for (style, slot) in map.iter_mut() {
        if slot.is_filled(Category::Shoes) {
            continue;
        }
        match pick_shoe(style, shoes, feels_like) {
            Some((tier, shoe)) => {
                tracing::debug!(
                    "Style {}: substituted shoes '{}' ({})",
                    style,
                    shoe.cloth_name,
                    tier.description()
                );
                slot.fill(Category::Shoes, shoe);
            }
            None => tracing::debug!("Style {}: no footwear available", style),
        }
    }
    map
}
