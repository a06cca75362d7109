use pricing_core::{Catalog, ViewDefaults, ViewState};
use std::rc::Rc;
use yew::prelude::*;

/// Progress of the initial data load
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Rc<Catalog>),
    /// Card or link resource failed; carries the message shown to the user
    Failed(AttrValue),
}

impl PartialEq for LoadState {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loading, Self::Loading) => true,
            (Self::Ready(a), Self::Ready(b)) => Rc::ptr_eq(a, b),
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub load: UseStateHandle<LoadState>,
    pub view: UseStateHandle<ViewState>,
}

#[hook]
pub fn use_app_state(defaults: ViewDefaults) -> AppState {
    AppState {
        load: use_state(|| LoadState::Loading),
        view: use_state(move || ViewState::new(defaults)),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        matches!(*self.load, LoadState::Ready(_))
    }
}
