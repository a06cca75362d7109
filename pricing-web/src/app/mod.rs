use crate::loader::DataSources;
use pricing_core::{ViewDefaults, ViewState};
use yew::prelude::*;

pub mod bootstrap;
pub mod page;
pub mod state;

pub use page::CatalogPage;
pub use state::LoadState;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    /// Category and page shown before any navigation
    #[prop_or_default]
    pub defaults: ViewDefaults,
    #[prop_or_default]
    pub sources: DataSources,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let app_state = state::use_app_state(props.defaults);
    bootstrap::use_bootstrap(&app_state, &props.sources);

    let on_change = {
        let view = app_state.view.clone();
        Callback::from(move |next: ViewState| view.set(next))
    };

    html! {
        <CatalogPage
            load={(*app_state.load).clone()}
            view={(*app_state.view).clone()}
            {on_change}
        />
    }
}
