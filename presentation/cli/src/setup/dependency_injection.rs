use std::sync::Arc;

use business::application::catalog::controller::CatalogController;
use catalog_api::client::CatalogApiClient;
use catalog_api::product_fetcher::ProductFetcherHttp;
use logger::TracingLogger;
use persistence::favorites::repository::FavoritesRepositoryFile;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub controller: CatalogController,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let fetcher = Arc::new(ProductFetcherHttp::new(CatalogApiClient::new(
            config.api.endpoint,
        )));
        let favorites_repository = Arc::new(FavoritesRepositoryFile::new(config.store));

        // The controller loads the persisted favorites on construction
        let controller = CatalogController::new(fetcher, favorites_repository, logger);

        Self { controller }
    }
}
