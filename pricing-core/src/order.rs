//! Display order of cards per view
use crate::data::Card;
use serde::{Deserialize, Serialize};

/// Card ids in display order for each view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    pub full: Vec<String>,
    pub collapsed: Vec<String>,
}

/// Shape of the order resource; either list may be omitted
#[derive(Debug, Deserialize)]
struct OrderDocument {
    #[serde(default)]
    full: Option<Vec<String>>,
    #[serde(default)]
    collapsed: Option<Vec<String>>,
}

impl OrderConfig {
    /// Both views follow the card list's storage order.
    #[must_use]
    pub fn insertion_order(cards: &[Card]) -> Self {
        let ids = Card::ids(cards);
        Self {
            full: ids.clone(),
            collapsed: ids,
        }
    }

    /// Parse the order resource. A missing list falls back to storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or not an object of id lists.
    pub fn from_json(json: &str, cards: &[Card]) -> Result<Self, serde_json::Error> {
        let doc: OrderDocument = serde_json::from_str(json)?;
        Ok(Self {
            full: doc.full.unwrap_or_else(|| Card::ids(cards)),
            collapsed: doc.collapsed.unwrap_or_else(|| Card::ids(cards)),
        })
    }

    /// Best-effort variant: an absent or unparsable resource yields
    /// [`OrderConfig::insertion_order`].
    #[must_use]
    pub fn from_json_or_default(json: Option<&str>, cards: &[Card]) -> Self {
        let Some(json) = json else {
            log::warn!("order resource unavailable, using card list order");
            return Self::insertion_order(cards);
        };
        Self::from_json(json, cards).unwrap_or_else(|err| {
            log::warn!("order resource unparsable ({err}), using card list order");
            Self::insertion_order(cards)
        })
    }
}
