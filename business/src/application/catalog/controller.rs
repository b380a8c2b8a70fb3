use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::catalog::errors::FetchError;
use crate::domain::catalog::filter;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::{FavoritesMap, FavoritesRepository};
use crate::domain::catalog::services::ProductFetchService;
use crate::domain::catalog::value_objects::{FilterCriteria, LoadPhase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

/// Read-only view of the catalog state. The presentation layer pulls a fresh
/// snapshot whenever the revision channel reports a change.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub phase: LoadPhase,
    pub error_message: Option<String>,
}

impl CatalogSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }
}

/// Single owner of the authoritative product list and the favorites map.
///
/// All mutations go through `&mut self`, so one owner serializes every state
/// change; the fetch await is the only suspension point and resumes on the
/// owning task. Fetch errors never escape `fetch_products`: they become a
/// displayable message and the `Failed` phase.
pub struct CatalogController {
    fetcher: Arc<dyn ProductFetchService>,
    repository: Arc<dyn FavoritesRepository>,
    logger: Arc<dyn Logger>,
    products: Vec<Product>,
    favorites: FavoritesMap,
    phase: LoadPhase,
    error_message: Option<String>,
    revision: watch::Sender<u64>,
}

impl CatalogController {
    /// Wires the collaborators and reads the persisted favorites once.
    pub fn new(
        fetcher: Arc<dyn ProductFetchService>,
        repository: Arc<dyn FavoritesRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let favorites = repository.load();
        logger.info(&format!("Loaded {} favorite entries", favorites.len()));

        let (revision, _) = watch::channel(0);
        Self {
            fetcher,
            repository,
            logger,
            products: Vec::new(),
            favorites,
            phase: LoadPhase::Idle,
            error_message: None,
            revision,
        }
    }

    /// Fetches the product list, replacing the previous one wholesale on
    /// success. On failure the previous list stays untouched and the phase
    /// moves to `Failed` with a displayable message.
    pub async fn fetch_products(&mut self) {
        self.logger.info("Fetching product catalog");
        self.phase = LoadPhase::Loading;
        self.error_message = None;
        self.publish();

        match self.fetcher.fetch_products().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Catalog loaded with {} products", products.len()));
                self.products = products;
                self.phase = LoadPhase::Loaded;
            }
            Err(error) => {
                self.logger
                    .error(&format!("Catalog fetch failed: {}", error));
                self.error_message = Some(display_message(&error).to_string());
                self.phase = LoadPhase::Failed;
            }
        }
        self.publish();
    }

    /// Derives a filtered view of the current authoritative list. Pure: no
    /// state is touched and no observers are notified.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Product> {
        filter::apply_filters(&self.products, criteria)
    }

    /// Flips the favorite flag for `id` (absent counts as false, so the
    /// first toggle sets it), persists the full mapping inline, then
    /// notifies observers. A persistence failure is logged and absorbed.
    pub fn toggle_favorite(&mut self, id: ProductId) {
        let flag = !self.is_favorite(id);
        self.favorites.insert(id, flag);

        if let Err(error) = self.repository.save(&self.favorites) {
            self.logger
                .warn(&format!("Failed to persist favorites: {}", error));
        }
        self.logger
            .debug(&format!("Favorite {} set to {}", id, flag));
        self.publish();
    }

    /// Favorite lookup; ids never toggled default to false.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.get(&id).copied().unwrap_or(false)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.clone(),
            phase: self.phase,
            error_message: self.error_message.clone(),
        }
    }

    /// Change notification: the receiver observes a revision bump for every
    /// state change and re-reads via `snapshot`.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn publish(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Maps a fetch error to the message shown to the user.
fn display_message(error: &FetchError) -> &'static str {
    match error {
        FetchError::InvalidEndpoint => "The catalog endpoint is misconfigured.",
        FetchError::Transport { .. } => {
            "Could not reach the catalog. Check your connection and try again."
        }
        FetchError::EmptyResponse => "The catalog returned no data.",
        FetchError::Decode { .. } => "The catalog returned data in an unexpected format.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Category;
    use crate::domain::errors::RepositoryError;
    use async_trait::async_trait;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        pub Fetcher {}

        #[async_trait]
        impl ProductFetchService for Fetcher {
            async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
        }
    }

    mock! {
        pub FavoritesRepo {}

        impl FavoritesRepository for FavoritesRepo {
            fn load(&self) -> FavoritesMap;
            fn save(&self, favorites: &FavoritesMap) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn empty_repo() -> Arc<dyn FavoritesRepository> {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load().returning(FavoritesMap::new);
        repo.expect_save().returning(|_| Ok(()));
        Arc::new(repo)
    }

    fn idle_fetcher() -> Arc<dyn ProductFetchService> {
        Arc::new(MockFetcher::new())
    }

    fn product(id: i64, category: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price,
            category: Category::new(category),
            images: vec![],
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.as_i64()).collect()
    }

    #[tokio::test]
    async fn should_start_idle_with_favorites_from_the_store() {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load()
            .returning(|| HashMap::from([(ProductId::new(1), true)]));

        let controller =
            CatalogController::new(idle_fetcher(), Arc::new(repo), mock_logger());

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, LoadPhase::Idle);
        assert!(snapshot.products.is_empty());
        assert!(snapshot.error_message.is_none());
        assert!(controller.is_favorite(ProductId::new(1)));
        assert!(!controller.is_favorite(ProductId::new(2)));
    }

    #[tokio::test]
    async fn should_replace_products_and_mark_loaded_when_fetch_succeeds() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_products()
            .returning(|| Ok(vec![product(2, "Shoes", 40.0), product(1, "Shoes", 60.0)]));

        let mut controller =
            CatalogController::new(Arc::new(fetcher), empty_repo(), mock_logger());
        controller.fetch_products().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, LoadPhase::Loaded);
        assert!(!snapshot.is_loading());
        assert!(snapshot.error_message.is_none());
        // server order is preserved, not re-sorted
        assert_eq!(ids(&snapshot.products), vec![2, 1]);
    }

    #[tokio::test]
    async fn should_keep_previous_products_and_mark_failed_when_fetch_fails() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_products()
            .times(1)
            .returning(|| Ok(vec![product(1, "Shoes", 40.0)]));
        fetcher.expect_fetch_products().times(1).returning(|| {
            Err(FetchError::Transport {
                cause: "connection refused".to_string(),
            })
        });

        let mut controller =
            CatalogController::new(Arc::new(fetcher), empty_repo(), mock_logger());
        controller.fetch_products().await;
        controller.fetch_products().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, LoadPhase::Failed);
        assert_eq!(ids(&snapshot.products), vec![1]);
        assert!(!snapshot.error_message.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_clear_error_message_when_a_later_fetch_succeeds() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_products()
            .times(1)
            .returning(|| Err(FetchError::EmptyResponse));
        fetcher
            .expect_fetch_products()
            .times(1)
            .returning(|| Ok(vec![product(1, "Shoes", 40.0)]));

        let mut controller =
            CatalogController::new(Arc::new(fetcher), empty_repo(), mock_logger());
        controller.fetch_products().await;
        assert!(controller.snapshot().error_message.is_some());

        controller.fetch_products().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, LoadPhase::Loaded);
        assert!(snapshot.error_message.is_none());
    }

    #[tokio::test]
    async fn should_flip_favorite_and_persist_full_mapping_on_each_toggle() {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load().returning(FavoritesMap::new);
        repo.expect_save()
            .times(1)
            .withf(|favorites| favorites == &HashMap::from([(ProductId::new(7), true)]))
            .returning(|_| Ok(()));
        repo.expect_save()
            .times(1)
            .withf(|favorites| favorites == &HashMap::from([(ProductId::new(7), false)]))
            .returning(|_| Ok(()));

        let mut controller =
            CatalogController::new(idle_fetcher(), Arc::new(repo), mock_logger());

        controller.toggle_favorite(ProductId::new(7));
        assert!(controller.is_favorite(ProductId::new(7)));

        controller.toggle_favorite(ProductId::new(7));
        assert!(!controller.is_favorite(ProductId::new(7)));
    }

    #[tokio::test]
    async fn should_keep_favorite_state_consistent_over_many_toggles() {
        let mut controller =
            CatalogController::new(idle_fetcher(), empty_repo(), mock_logger());
        let id = ProductId::new(3);

        for round in 1..=5 {
            controller.toggle_favorite(id);
            assert_eq!(controller.is_favorite(id), round % 2 == 1);
        }
    }

    #[tokio::test]
    async fn should_retain_stale_favorites_after_a_new_fetch() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_products()
            .returning(|| Ok(vec![product(1, "Shoes", 40.0)]));
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load()
            .returning(|| HashMap::from([(ProductId::new(99), true)]));

        let mut controller =
            CatalogController::new(Arc::new(fetcher), Arc::new(repo), mock_logger());
        controller.fetch_products().await;

        assert!(controller.is_favorite(ProductId::new(99)));
    }

    #[tokio::test]
    async fn should_absorb_persistence_failures_when_toggling() {
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load().returning(FavoritesMap::new);
        repo.expect_save()
            .returning(|_| Err(RepositoryError::Persistence));

        let mut controller =
            CatalogController::new(idle_fetcher(), Arc::new(repo), mock_logger());
        controller.toggle_favorite(ProductId::new(7));

        assert!(controller.is_favorite(ProductId::new(7)));
    }

    #[tokio::test]
    async fn should_notify_observers_on_fetch_and_toggle() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_products().returning(|| Ok(vec![]));

        let mut controller =
            CatalogController::new(Arc::new(fetcher), empty_repo(), mock_logger());
        let receiver = controller.subscribe();
        let before = *receiver.borrow();

        controller.fetch_products().await;
        let after_fetch = *receiver.borrow();
        assert!(after_fetch > before);

        controller.toggle_favorite(ProductId::new(1));
        assert!(*receiver.borrow() > after_fetch);
    }

    #[tokio::test]
    async fn should_filter_current_list_without_touching_state() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_products().returning(|| {
            Ok(vec![
                product(1, "Shoes", 40.0),
                product(2, "Electronics", 60.0),
                product(3, "Shoes", 120.0),
            ])
        });

        let mut controller =
            CatalogController::new(Arc::new(fetcher), empty_repo(), mock_logger());
        controller.fetch_products().await;

        let criteria = FilterCriteria::new(Some("Shoes".to_string()), Some(50.0));
        let filtered = controller.filter(&criteria);

        assert_eq!(ids(&filtered), vec![1]);
        assert_eq!(ids(&controller.snapshot().products), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn should_support_favorites_only_views_through_the_predicate() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_products()
            .returning(|| Ok(vec![product(1, "Shoes", 40.0), product(2, "Shoes", 60.0)]));
        let mut repo = MockFavoritesRepo::new();
        repo.expect_load()
            .returning(|| HashMap::from([(ProductId::new(1), true)]));

        let mut controller =
            CatalogController::new(Arc::new(fetcher), Arc::new(repo), mock_logger());
        controller.fetch_products().await;

        let favorites: Vec<Product> = controller
            .snapshot()
            .products
            .into_iter()
            .filter(|p| controller.is_favorite(p.id))
            .collect();

        assert_eq!(ids(&favorites), vec![1]);
    }
}
