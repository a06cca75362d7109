//! Card categories derived from header text
use crate::constants::{ALIANCA_MARKER, LEGADO_MARKER};
use crate::data::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two fixed groupings a card can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Legado,
    Alianca,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Self; 2] = [Self::Legado, Self::Alianca];

    /// Value carried by the `data-cat` attribute of navigation links.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legado => "legado",
            Self::Alianca => "alianca",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legado => "Legado",
            Self::Alianca => "Aliança",
        }
    }

    const fn marker(self) -> &'static str {
        match self {
            Self::Legado => LEGADO_MARKER,
            Self::Alianca => ALIANCA_MARKER,
        }
    }

    /// Case-insensitive substring match of the category marker in `header`.
    #[must_use]
    pub fn matches_header(self, header: &str) -> bool {
        header.to_lowercase().contains(self.marker())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cat| cat.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Whether `card` belongs in `category`. A card whose header carries neither
/// marker belongs to no category.
#[must_use]
pub fn is_category(card: &Card, category: Category) -> bool {
    category.matches_header(&card.header)
}
