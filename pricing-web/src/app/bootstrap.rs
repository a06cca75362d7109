use crate::app::state::{AppState, LoadState};
use crate::loader::DataSources;
use pricing_core::LoadError;
use pricing_core::constants::LOAD_ERROR_MESSAGE;
use yew::prelude::*;

/// Map the loader outcome onto what the page shows.
pub(crate) fn load_state_from(result: Result<pricing_core::Catalog, LoadError>) -> LoadState {
    match result {
        Ok(catalog) => LoadState::Ready(std::rc::Rc::new(catalog)),
        Err(err) => {
            log::error!("Failed to load catalog: {err}");
            LoadState::Failed(AttrValue::from(LOAD_ERROR_MESSAGE))
        }
    }
}

/// Kick off the one-time catalog load when the app mounts.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState, sources: &DataSources) {
    let load = app_state.load.clone();
    let sources = sources.clone();

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::loader::load_catalog(&sources).await;
            load.set(load_state_from(result));
        });
        || {}
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(app_state: &AppState, sources: &DataSources) {
    let _ = (app_state, sources);
}
