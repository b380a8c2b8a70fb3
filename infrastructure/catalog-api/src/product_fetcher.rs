use async_trait::async_trait;
use url::Url;

use business::domain::catalog::errors::FetchError;
use business::domain::catalog::model::Product;
use business::domain::catalog::services::ProductFetchService;

use crate::client::CatalogApiClient;
use crate::records::decode_products;

/// Fetches the product catalog over HTTP. One GET per invocation, no
/// retries, no caching.
pub struct ProductFetcherHttp {
    client: CatalogApiClient,
}

impl ProductFetcherHttp {
    pub fn new(client: CatalogApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductFetchService for ProductFetcherHttp {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        // A malformed endpoint fails before any network traffic.
        let url = Url::parse(self.client.products_url())
            .map_err(|_| FetchError::InvalidEndpoint)?;

        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::Transport {
                cause: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                cause: format!("http status {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| FetchError::Transport {
                cause: error.to_string(),
            })?;

        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        decode_products(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fail_with_invalid_endpoint_before_any_request() {
        let fetcher = ProductFetcherHttp::new(CatalogApiClient::new("not a url".to_string()));

        let result = fetcher.fetch_products().await;

        assert!(matches!(result, Err(FetchError::InvalidEndpoint)));
    }
}
