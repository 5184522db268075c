//! Style Filter
//!
//! Drops the unspecified-style group when the caller asks for it.

use super::style_map::StyleMap;
use crate::model::StyleKey;

/// Remove the `Unspecified` group (all of its slots together) if `hide_unspecified`
pub fn filter_styles(mut map: StyleMap, hide_unspecified: bool) -> StyleMap {
    if hide_unspecified && map.remove(&StyleKey::Unspecified).is_some() {
        tracing::debug!("Hid {} style group", StyleKey::UNSPECIFIED_KEY);
    }
    map
}
