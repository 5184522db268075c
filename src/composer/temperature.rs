//! Temperature Matcher
//!
//! Decides whether an item's comfortable feels-like range covers the
//! reference temperature. Used by the assembler to prioritise items and by
//! the shoe resolver to rank substitutes.

use crate::model::OutfitItem;

/// Check if `item` is comfortable at the reference feels-like temperature
///
/// - No reference temperature: every item matches (filtering disabled)
/// - Item missing either bound: never a match (it can still be used as a fallback)
/// - Otherwise: `min <= reference <= max`, inclusive on both ends
pub fn is_temp_match(item: &OutfitItem, feels_like: Option<f64>) -> bool {
    let Some(feels_like) = feels_like else {
        return true;
    };

    match (item.min_feels_like, item.max_feels_like) {
        (Some(min), Some(max)) => min <= feels_like && feels_like <= max,
        _ => false,
    }
}
