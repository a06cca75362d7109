use serde::{Deserialize, Serialize};

/// One priced option inside a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceItem {
    /// Unique within the owning card; used to look up the item's link
    pub key: String,
    #[serde(default)]
    pub label: String,
}

/// A catalog entry, rendered as a hero block followed by its price list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    /// Free text that also decides the card's category
    #[serde(default)]
    pub header: String,
    /// Primary (cash price) title
    #[serde(default)]
    pub avista: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<PriceItem>,
}

impl Card {
    /// Parse the card list resource (a JSON array of cards).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a card lacks an `id`.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Ids of `cards` in their stored order.
    #[must_use]
    pub fn ids(cards: &[Self]) -> Vec<String> {
        cards.iter().map(|card| card.id.clone()).collect()
    }
}
