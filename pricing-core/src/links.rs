//! Link table lookups for hero and price-row QR targets.
use crate::constants::HERO_LINK_KEYS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A top-level value of the link table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEntry {
    /// Bare URL addressed directly by an item key
    Url(String),
    /// Item key to URL mapping for one card
    Group(BTreeMap<String, Value>),
    /// Anything else; never yields a URL
    Other(Value),
}

impl LinkEntry {
    fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => non_empty(url),
            Self::Group(_) | Self::Other(_) => None,
        }
    }

    fn member(&self, key: &str) -> Option<&str> {
        match self {
            Self::Group(group) => group.get(key).and_then(Value::as_str).and_then(non_empty),
            Self::Url(_) | Self::Other(_) => None,
        }
    }
}

fn non_empty(url: &str) -> Option<&str> {
    (!url.is_empty()).then_some(url)
}

/// Card id (or bare item key) to link mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LinkTable {
    entries: BTreeMap<String, LinkEntry>,
}

impl LinkTable {
    /// Parse the link resource (a JSON object).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or is not an object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, LinkEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// URL stored under `card_id` for `key`, without any fallback.
    #[must_use]
    pub fn grouped(&self, card_id: &str, key: &str) -> Option<&str> {
        self.entries.get(card_id).and_then(|entry| entry.member(key))
    }

    /// URL stored directly at the top level under `key`.
    #[must_use]
    pub fn top_level(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(LinkEntry::url)
    }

    /// Target of a price row: the card's own entry first, then the bare key.
    #[must_use]
    pub fn item_url(&self, card_id: &str, key: &str) -> Option<&str> {
        self.grouped(card_id, key).or_else(|| self.top_level(key))
    }

    /// Target of a card's hero QR. Only the card's own entry is consulted.
    #[must_use]
    pub fn hero_url(&self, card_id: &str) -> Option<&str> {
        HERO_LINK_KEYS
            .iter()
            .find_map(|key| self.grouped(card_id, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LinkTable {
        LinkTable::from_json(
            r#"{
                "c1": {"a": "https://x", "avista": "https://hero", "empty": ""},
                "c2": {"1x": "https://one", "avista": "https://cash"},
                "shared": "https://shared",
                "blank": "",
                "count": 3
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn item_lookup_prefers_card_group() {
        let links = table();
        assert_eq!(links.item_url("c1", "a"), Some("https://x"));
        assert_eq!(links.item_url("c1", "shared"), Some("https://shared"));
        assert_eq!(links.item_url("c1", "b"), None);
    }

    #[test]
    fn empty_and_non_string_values_do_not_resolve() {
        let links = table();
        assert_eq!(links.item_url("c1", "empty"), None);
        assert_eq!(links.item_url("c1", "blank"), None);
        assert_eq!(links.item_url("c1", "count"), None);
        assert_eq!(links.item_url("c9", "c1"), None);
    }

    #[test]
    fn hero_prefers_one_installment_then_cash() {
        let links = table();
        assert_eq!(links.hero_url("c2"), Some("https://one"));
        assert_eq!(links.hero_url("c1"), Some("https://hero"));
        assert_eq!(links.hero_url("shared"), None);
        assert_eq!(links.hero_url("missing"), None);
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(LinkTable::from_json("[1, 2]").is_err());
    }
}
