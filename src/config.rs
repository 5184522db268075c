//! Composer Configuration
//!
//! Caller-facing switches for the composer and its card view, plus the
//! style display labels. Loaded from JSON; every field is optional and
//! falls back to the application defaults.

use crate::model::StyleKey;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Composer and card settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Drop the group of items that carry no style
    pub hide_unspecified: bool,

    /// Render an empty accessory cell as blank instead of a placeholder
    pub hide_extra_placeholder: bool,

    pub labels: StyleLabels,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            hide_unspecified: true,
            hide_extra_placeholder: true,
            labels: StyleLabels::default(),
        }
    }
}

impl ComposerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read composer config: {:?}", path))?;

        let config: ComposerConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse composer config JSON: {:?}", path))?;

        config.labels.validate()?;
        Ok(config)
    }

    pub fn with_hide_unspecified(mut self, hide: bool) -> Self {
        self.hide_unspecified = hide;
        self
    }

    pub fn with_hide_extra_placeholder(mut self, hide: bool) -> Self {
        self.hide_extra_placeholder = hide;
        self
    }
}

/// Display titles for style groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleLabels {
    /// Named style tag -> title
    named: FxHashMap<String, String>,

    /// Title of the unspecified group
    unspecified: String,
}

impl Default for StyleLabels {
    fn default() -> Self {
        let named = [
            ("CASUAL_DAILY", "Casual"),
            ("FORMAL_OFFICE", "Office look"),
            ("OUTDOOR", "Outdoor"),
            ("DATE_LOOK", "Date look"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            named,
            unspecified: "Other".to_string(),
        }
    }
}

impl StyleLabels {
    /// Title for a style group; unknown styles show their raw tag
    pub fn title_for<'a>(&'a self, style: &'a StyleKey) -> &'a str {
        match style {
            StyleKey::Named(name) => self.named.get(name).map(String::as_str).unwrap_or(name.as_str()),
            StyleKey::Unspecified => &self.unspecified,
        }
    }

    pub fn set(&mut self, style: &StyleKey, title: impl Into<String>) {
        match style {
            StyleKey::Named(name) => {
                self.named.insert(name.clone(), title.into());
            }
            StyleKey::Unspecified => self.unspecified = title.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.unspecified.trim().is_empty() {
            anyhow::bail!("Label for the unspecified style group is empty");
        }
        if let Some((style, _)) = self.named.iter().find(|(_, title)| title.trim().is_empty()) {
            anyhow::bail!("Label for style '{}' is empty", style);
        }
        Ok(())
    }
}
