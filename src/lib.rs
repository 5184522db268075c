//! Outfit Composer
//!
//! Assembles weather-appropriate outfits from recommended wardrobe items.
//!
//! Given items grouped by category (top, bottom, shoes, accessory) and a
//! feels-like temperature, the composer builds one outfit per style group,
//! preferring items whose comfortable range covers the temperature and
//! falling back to anything available so no category is left empty without
//! need.
//!
//! Module layout:
//! - `model`: Wardrobe items, categories, style keys, outfit slots
//! - `composer/`: The composition pipeline (assemble → resolve shoes → filter)
//! - `config`: Composer switches and style labels
//! - `card`: Render view-model (one card per style)
//! - `details`: Backend cloth-details payload
//! - `listing`: Unique / aggregated wardrobe listings

pub mod model;
pub mod composer;
pub mod config;
pub mod card;
pub mod details;
pub mod listing;
pub mod error;

// Re-export commonly used types
pub use model::{CategorizedItems, Category, OutfitItem, OutfitSlot, StyleKey};
pub use composer::{compose, ComposeRequest, OutfitComposer, StyleMap};
pub use config::{ComposerConfig, StyleLabels};
pub use card::{CardDeck, CellContent, OutfitCard};
pub use details::{ClothDetails, RecommendationMode, WeatherInfo};
pub use listing::{build_listing, Listing, ListingMode, PlanClothes};
pub use error::OutfitError;
