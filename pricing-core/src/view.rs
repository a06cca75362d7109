//! Navigation and modal state of the catalog page.
//!
//! Every transition consumes the current state and returns the next one, so
//! the owner decides when to commit it.
use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which grid is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Full,
    Collapsed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page `{0}`")]
pub struct UnknownPage(pub String);

impl Page {
    pub const ALL: [Self; 2] = [Self::Full, Self::Collapsed];

    /// Value carried by the `data-page` attribute of navigation links.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Collapsed => "collapsed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Completo",
            Self::Collapsed => "Resumido",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Initial navigation state handed to the page on load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewDefaults {
    pub category: Category,
    pub page: Page,
}

/// Something the user did to the QR modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    CloseButton,
    /// Click that landed on the backdrop itself
    Backdrop,
    /// Click inside the dialog content
    Content,
    /// Key pressed anywhere on the document
    Key(String),
}

impl ModalEvent {
    #[must_use]
    pub fn closes_modal(&self) -> bool {
        match self {
            Self::CloseButton | Self::Backdrop => true,
            Self::Content => false,
            Self::Key(key) => key == "Escape",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub category: Category,
    pub page: Page,
    /// URL shown in the QR modal, `None` while the modal is hidden
    pub qr_target: Option<String>,
}

impl ViewState {
    #[must_use]
    pub const fn new(defaults: ViewDefaults) -> Self {
        Self {
            category: defaults.category,
            page: defaults.page,
            qr_target: None,
        }
    }

    /// Switch category; any open modal is hidden.
    #[must_use]
    pub fn with_category(self, category: Category) -> Self {
        Self {
            category,
            qr_target: None,
            ..self
        }
    }

    /// Switch visible grid; any open modal is hidden.
    #[must_use]
    pub fn with_page(self, page: Page) -> Self {
        Self {
            page,
            qr_target: None,
            ..self
        }
    }

    #[must_use]
    pub fn show_qr(self, url: impl Into<String>) -> Self {
        Self {
            qr_target: Some(url.into()),
            ..self
        }
    }

    #[must_use]
    pub fn hide_qr(self) -> Self {
        Self {
            qr_target: None,
            ..self
        }
    }

    #[must_use]
    pub fn on_modal_event(self, event: &ModalEvent) -> Self {
        if event.closes_modal() {
            self.hide_qr()
        } else {
            self
        }
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.qr_target.is_some()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewDefaults::default())
    }
}
