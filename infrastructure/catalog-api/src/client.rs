use reqwest::Client;

/// Shared catalog API HTTP client configuration.
pub struct CatalogApiClient {
    pub client: Client,
    pub endpoint: String,
}

impl CatalogApiClient {
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, endpoint }
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> &str {
        &self.endpoint
    }
}
