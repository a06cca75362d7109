//! Browser loading of the three catalog resources.
use crate::dom;
use crate::paths::data_path;
use pricing_core::{Catalog, LoadError, Resource};

/// Where the catalog resources are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub cards: String,
    pub links: String,
    pub order: String,
}

impl DataSources {
    #[must_use]
    pub fn url(&self, resource: Resource) -> &str {
        match resource {
            Resource::Cards => &self.cards,
            Resource::Links => &self.links,
            Resource::Order => &self.order,
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            cards: data_path(Resource::Cards),
            links: data_path(Resource::Links),
            order: data_path(Resource::Order),
        }
    }
}

/// Fetch one resource body; a non-2xx status is a failure.
#[allow(clippy::future_not_send)]
async fn fetch_resource(sources: &DataSources, resource: Resource) -> Result<String, LoadError> {
    let url = sources.url(resource);
    let fetch_err = |err: dom::DomError| LoadError::Fetch {
        resource,
        message: err.to_string(),
    };

    let response = dom::fetch_response(url).await.map_err(fetch_err)?;
    if !response.ok() {
        return Err(LoadError::Http {
            resource,
            status: response.status(),
        });
    }
    dom::response_text(&response).await.map_err(fetch_err)
}

/// Fetch cards, links and order concurrently and join them.
///
/// # Errors
///
/// Returns an error when the card or link resource fails; order failures are
/// recovered inside [`Catalog::assemble`].
#[allow(clippy::future_not_send)]
pub async fn load_catalog(sources: &DataSources) -> Result<Catalog, LoadError> {
    let (cards, links, order) = futures::join!(
        fetch_resource(sources, Resource::Cards),
        fetch_resource(sources, Resource::Links),
        fetch_resource(sources, Resource::Order),
    );
    let catalog = Catalog::assemble(cards, links, order)?;
    log::info!("catalog loaded with {} cards", catalog.cards().len());
    Ok(catalog)
}
