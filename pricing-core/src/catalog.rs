//! Loaded catalog: cards, links and display order joined behind one index.
use crate::constants::{CARDS_FILE, LINKS_FILE, ORDER_FILE};
use crate::data::Card;
use crate::index::CardIndex;
use crate::links::LinkTable;
use crate::order::OrderConfig;
use std::fmt;
use thiserror::Error;

/// The three independently fetched data resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Cards,
    Links,
    Order,
}

impl Resource {
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Cards => CARDS_FILE,
            Self::Links => LINKS_FILE,
            Self::Order => ORDER_FILE,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cards => "cards",
            Self::Links => "links",
            Self::Order => "order",
        })
    }
}

/// Why a resource could not be turned into catalog data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{resource} request failed: {message}")]
    Fetch { resource: Resource, message: String },
    #[error("{resource} request returned HTTP {status}")]
    Http { resource: Resource, status: u16 },
    #[error("{resource} JSON parsing error: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    #[must_use]
    pub const fn resource(&self) -> Resource {
        match self {
            Self::Fetch { resource, .. }
            | Self::Http { resource, .. }
            | Self::Parse { resource, .. } => *resource,
        }
    }
}

/// Immutable data behind one page render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Card>,
    links: LinkTable,
    order: OrderConfig,
    index: CardIndex,
}

impl Catalog {
    #[must_use]
    pub fn new(cards: Vec<Card>, links: LinkTable, order: OrderConfig) -> Self {
        let index = CardIndex::build(&cards);
        Self {
            cards,
            links,
            order,
            index,
        }
    }

    /// Join the raw bodies of the three resources.
    ///
    /// The order resource is best effort: a failed fetch or parse falls back
    /// to card list order. Card or link failures abort the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns the card or link fetch error, or their parse error.
    pub fn assemble(
        cards: Result<String, LoadError>,
        links: Result<String, LoadError>,
        order: Result<String, LoadError>,
    ) -> Result<Self, LoadError> {
        let cards = Card::list_from_json(&cards?).map_err(|source| LoadError::Parse {
            resource: Resource::Cards,
            source,
        })?;
        let links = LinkTable::from_json(&links?).map_err(|source| LoadError::Parse {
            resource: Resource::Links,
            source,
        })?;
        let order = match order {
            Ok(body) => OrderConfig::from_json_or_default(Some(&body), &cards),
            Err(err) => {
                log::warn!("{err}");
                OrderConfig::from_json_or_default(None, &cards)
            }
        };
        Ok(Self::new(cards, links, order))
    }

    /// Build from already available bodies; `order` may be absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the card or link JSON cannot be parsed.
    pub fn from_sources(cards: &str, links: &str, order: Option<&str>) -> Result<Self, LoadError> {
        let order = order.map(str::to_string).ok_or(LoadError::Fetch {
            resource: Resource::Order,
            message: "not provided".to_string(),
        });
        Self::assemble(Ok(cards.to_string()), Ok(links.to_string()), order)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub const fn links(&self) -> &LinkTable {
        &self.links
    }

    #[must_use]
    pub const fn order(&self) -> &OrderConfig {
        &self.order
    }

    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.index.get(&self.cards, id)
    }

    /// Cards for `ids` in list order; unknown ids are skipped.
    pub fn resolve<'a>(&'a self, ids: &'a [String]) -> impl Iterator<Item = &'a Card> + 'a {
        self.index.resolve(&self.cards, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = r#"[{"id":"a","header":"Legado"},{"id":"b","header":"Legado"}]"#;

    #[test]
    fn card_parse_failure_is_fatal() {
        let err = Catalog::from_sources("{not json", "{}", None).unwrap_err();
        assert_eq!(err.resource(), Resource::Cards);
        assert!(err.to_string().starts_with("cards JSON parsing error"));
    }

    #[test]
    fn link_fetch_failure_is_fatal() {
        let err = Catalog::assemble(
            Ok(CARDS.to_string()),
            Err(LoadError::Http {
                resource: Resource::Links,
                status: 404,
            }),
            Ok(r#"{"full":[],"collapsed":[]}"#.to_string()),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "links request returned HTTP 404");
    }

    #[test]
    fn order_fetch_failure_uses_card_order() {
        let catalog = Catalog::assemble(
            Ok(CARDS.to_string()),
            Ok("{}".to_string()),
            Err(LoadError::Fetch {
                resource: Resource::Order,
                message: "offline".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(catalog.order(), &OrderConfig::insertion_order(catalog.cards()));
        assert_eq!(catalog.order().full, vec!["a", "b"]);
    }

    #[test]
    fn lookups_go_through_index() {
        let catalog = Catalog::from_sources(CARDS, "{}", Some(r#"{"full":["b","x","a"]}"#))
            .unwrap();
        assert!(catalog.card("b").is_some());
        assert!(catalog.card("x").is_none());
        let ids: Vec<&str> = catalog
            .resolve(&catalog.order().full)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn resource_names_match_default_files() {
        assert_eq!(Resource::Cards.file_name(), "cards.json");
        assert_eq!(Resource::Order.to_string(), "order");
    }
}
