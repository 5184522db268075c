//! Outfit Composer
//!
//! Builds one complete outfit per style group from recommended wardrobe items.
//!
//! ## Pipeline
//! `assemble` → `resolve_shoes` → `filter_styles`
//!
//! - `temperature.rs` - Feels-like range predicate
//! - `style_map.rs` - Insertion-ordered style → slot table
//! - `assembler.rs` - Two-pass slot placement (temperature first, then backfill)
//! - `shoes.rs` - Four-tier footwear substitution
//! - `style_filter.rs` - Unspecified-group removal
//!
//! Every step is a pure function of its inputs; the composer holds no state
//! between calls.

pub mod temperature;
pub mod style_map;
pub mod assembler;
pub mod shoes;
pub mod style_filter;

pub use temperature::is_temp_match;
pub use style_map::StyleMap;
pub use assembler::{assemble, SlotAssembler};
pub use shoes::{pick_shoe, resolve_shoes, ShoeTier};
pub use style_filter::filter_styles;

use crate::card::CardDeck;
use crate::config::ComposerConfig;
use crate::details::{ClothDetails, RecommendationMode};
use crate::model::{CategorizedItems, Category};
use rayon::prelude::*;

/// Run the full pipeline for one set of items
pub fn compose(items: &CategorizedItems, feels_like: Option<f64>, hide_unspecified: bool) -> StyleMap {
    let map = assemble(items, feels_like);
    let map = resolve_shoes(map, items.items(Category::Shoes), feels_like);
    filter_styles(map, hide_unspecified)
}

/// One independent composition request
#[derive(Debug, Clone, Default)]
pub struct ComposeRequest {
    pub items: CategorizedItems,
    pub feels_like: Option<f64>,
}

/// Composer bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct OutfitComposer {
    config: ComposerConfig,
}

impl OutfitComposer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn compose(&self, items: &CategorizedItems, feels_like: Option<f64>) -> StyleMap {
        let map = compose(items, feels_like, self.config.hide_unspecified);
        tracing::info!(
            "Composed {} style groups from {} items (feels like {:?})",
            map.len(),
            items.len(),
            feels_like
        );
        map
    }

    /// Compose many requests in parallel; results keep request order
    pub fn compose_batch(&self, requests: &[ComposeRequest]) -> Vec<StyleMap> {
        requests
            .par_iter()
            .map(|req| compose(&req.items, req.feels_like, self.config.hide_unspecified))
            .collect()
    }

    /// Compose a map and turn it into render cards
    pub fn deck(&self, title: Option<&str>, items: &CategorizedItems, feels_like: Option<f64>) -> CardDeck {
        let map = self.compose(items, feels_like);
        CardDeck::build(title, &map, &self.config)
    }

    /// Compose one outfit set of a cloth-details payload at its feels-like temperature
    pub fn compose_details(&self, details: &ClothDetails, mode: RecommendationMode) -> CardDeck {
        self.deck(Some(mode.title()), details.outfits(mode), Some(details.feels_like()))
    }
}
