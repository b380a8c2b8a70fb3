use async_trait::async_trait;

use super::errors::FetchError;
use super::model::Product;

/// Service port for the remote product catalog.
///
/// One attempt per invocation: no retries, no caching. The returned products
/// keep the order the server sent them in.
#[async_trait]
pub trait ProductFetchService: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}
