//! Cloth Details Payload
//!
//! The backend answers a location lookup with the current weather and two
//! outfit sets (recommended / not recommended). Both sets are composed
//! against the weather's feels-like temperature.

use crate::error::{OutfitError, Result};
use crate::model::CategorizedItems;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weather snapshot attached to a cloth-details response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInfo {
    /// Condition key (e.g. "SCATTERED_CLOUDS")
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,

    /// Forecast date (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,

    pub feels_like_temperature: f64,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
    #[serde(default)]
    pub daily_temperature_gap: Option<f64>,

    /// Probability of precipitation
    #[serde(default)]
    pub pop: Option<f64>,
    #[serde(default)]
    pub rain: Option<f64>,
    #[serde(default)]
    pub snow: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub uvi: Option<f64>,
}

/// Which outfit set to compose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationMode {
    Recommended,
    NotRecommended,
}

impl RecommendationMode {
    pub fn title(&self) -> &'static str {
        match self {
            RecommendationMode::Recommended => "Recommended",
            RecommendationMode::NotRecommended => "Not recommended",
        }
    }
}

/// Full cloth-details response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothDetails {
    pub weather_info: WeatherInfo,
    #[serde(default)]
    pub recommended_outfits: CategorizedItems,
    #[serde(default)]
    pub not_recommended_outfits: CategorizedItems,
}

impl ClothDetails {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| OutfitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Reference temperature for composition
    pub fn feels_like(&self) -> f64 {
        self.weather_info.feels_like_temperature
    }

    pub fn outfits(&self, mode: RecommendationMode) -> &CategorizedItems {
        match mode {
            RecommendationMode::Recommended => &self.recommended_outfits,
            RecommendationMode::NotRecommended => &self.not_recommended_outfits,
        }
    }
}
