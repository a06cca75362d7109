//! View models for the two catalog grids.
//!
//! Builders resolve every link up front, so each price row already knows
//! whether its QR control is live and which URL it opens.
use crate::catalog::Catalog;
use crate::category::{Category, is_category};
use crate::data::Card;
use crate::links::LinkTable;

/// Header block of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub header: String,
    /// Target encoded in the hero QR image, when the card has one
    pub qr_target: Option<String>,
    pub title: String,
    pub subtitle: String,
}

/// One line of a price list with its two actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    pub card_id: String,
    pub key: String,
    pub label: String,
    /// URL handed to the QR modal; `None` disables the QR control
    pub qr_target: Option<String>,
}

impl PriceRow {
    #[must_use]
    pub const fn qr_enabled(&self) -> bool {
        self.qr_target.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub hero: HeroView,
    pub rows: Vec<PriceRow>,
}

/// Everything the page shows for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub category: Category,
    pub full: Vec<CardView>,
    pub collapsed: Vec<CardView>,
}

#[must_use]
pub fn build_hero(card: &Card, links: &LinkTable) -> HeroView {
    HeroView {
        header: card.header.clone(),
        qr_target: links.hero_url(&card.id).map(str::to_string),
        title: card.avista.clone(),
        subtitle: card.subtitle.clone(),
    }
}

#[must_use]
pub fn build_list(card: &Card, links: &LinkTable) -> Vec<PriceRow> {
    card.items
        .iter()
        .map(|item| PriceRow {
            card_id: card.id.clone(),
            key: item.key.clone(),
            label: item.label.clone(),
            qr_target: links.item_url(&card.id, &item.key).map(str::to_string),
        })
        .collect()
}

#[must_use]
pub fn build_card(card: &Card, links: &LinkTable) -> CardView {
    CardView {
        id: card.id.clone(),
        hero: build_hero(card, links),
        rows: build_list(card, links),
    }
}

/// Cards named by `ids`, in that order, restricted to `category`.
#[must_use]
pub fn compose_view(catalog: &Catalog, ids: &[String], category: Category) -> Vec<CardView> {
    catalog
        .resolve(ids)
        .filter(|card| is_category(card, category))
        .map(|card| build_card(card, catalog.links()))
        .collect()
}

#[must_use]
pub fn compose_page(catalog: &Catalog, category: Category) -> PageLayout {
    let order = catalog.order();
    PageLayout {
        category,
        full: compose_view(catalog, &order.full, category),
        collapsed: compose_view(catalog, &order.collapsed, category),
    }
}
