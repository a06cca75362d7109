//! Pricing catalog core
//!
//! Platform-agnostic composition for the pricing cards page: the data model,
//! the join of cards, links and display order, category filtering, view
//! models for both grids, QR image URLs and the navigation state machine.
//! Nothing here touches the browser.

pub mod catalog;
pub mod category;
pub mod constants;
pub mod data;
pub mod index;
pub mod layout;
pub mod links;
pub mod order;
pub mod qr;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, LoadError, Resource};
pub use category::{Category, UnknownCategory, is_category};
pub use data::{Card, PriceItem};
pub use index::CardIndex;
pub use layout::{
    CardView, HeroView, PageLayout, PriceRow, build_card, build_hero, build_list, compose_page,
    compose_view,
};
pub use links::{LinkEntry, LinkTable};
pub use order::OrderConfig;
pub use qr::{QrImageState, QrSource, encode_uri_component, fallback_qr_url, primary_qr_url};
pub use view::{ModalEvent, Page, UnknownPage, ViewDefaults, ViewState};
