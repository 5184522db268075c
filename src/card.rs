//! Outfit Cards
//!
//! View-model handed to renderers: one card per style group, four cells in
//! grid order (top, shoes / bottom, accessory). Empty cells carry either a
//! placeholder or nothing at all, depending on the category and config.

use crate::composer::StyleMap;
use crate::config::ComposerConfig;
use crate::model::{Category, OutfitItem, OutfitSlot, StyleKey};
use smallvec::SmallVec;
use std::fmt;

/// Text shown in an empty cell
pub const PLACEHOLDER_TEXT: &str = "None";

/// Text shown when a deck has no cards
pub const EMPTY_DECK_MESSAGE: &str = "Nothing to show";

/// Cell order on a card: row 1 top / shoes, row 2 bottom / accessory
const GRID_ORDER: [Category; 4] = [Category::Top, Category::Shoes, Category::Bottom, Category::Extra];

/// What a single card cell displays
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Filled(OutfitItem),
    Placeholder,
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardCell {
    pub category: Category,
    pub caption: &'static str,
    pub content: CellContent,
}

/// One style group rendered as a card
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitCard {
    pub style: StyleKey,
    pub title: String,
    pub cells: SmallVec<[CardCell; 4]>,
}

impl OutfitCard {
    pub fn build(style: &StyleKey, slot: &OutfitSlot, config: &ComposerConfig) -> Self {
        let cells = GRID_ORDER
            .iter()
            .map(|&category| {
                let content = match slot.get(category) {
                    Some(item) => CellContent::Filled(item.clone()),
                    None if category == Category::Extra && config.hide_extra_placeholder => CellContent::Blank,
                    None => CellContent::Placeholder,
                };
                CardCell {
                    category,
                    caption: category.caption(),
                    content,
                }
            })
            .collect();

        Self {
            style: style.clone(),
            title: config.labels.title_for(style).to_string(),
            cells,
        }
    }

    pub fn cell(&self, category: Category) -> Option<&CardCell> {
        self.cells.iter().find(|c| c.category == category)
    }
}

/// Cards for one composed style map
#[derive(Debug, Clone, PartialEq)]
pub struct CardDeck {
    pub title: Option<String>,
    pub cards: Vec<OutfitCard>,
}

impl CardDeck {
    pub fn build(title: Option<&str>, map: &StyleMap, config: &ComposerConfig) -> Self {
        Self {
            title: title.map(str::to_string),
            cards: map
                .iter()
                .map(|(style, slot)| OutfitCard::build(style, slot, config))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Message to show instead of cards, if there are none
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_DECK_MESSAGE)
    }

    /// Plain-text rendering used by the CLI
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "== {} ==", title)?;
        }
        if let Some(message) = self.empty_message() {
            return writeln!(f, "{}", message);
        }

        for card in &self.cards {
            writeln!(f, "\n[{}]", card.title)?;
            for cell in &card.cells {
                let text = match &cell.content {
                    CellContent::Filled(item) => item.cloth_name.as_str(),
                    CellContent::Placeholder => PLACEHOLDER_TEXT,
                    CellContent::Blank => continue,
                };
                writeln!(f, "  {:<10} {}", format!("{}:", cell.caption), text)?;
            }
        }
        Ok(())
    }
}
