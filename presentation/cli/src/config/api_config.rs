use std::env;

/// Public demo catalog used when no endpoint is configured.
const DEFAULT_ENDPOINT: &str = "https://api.escuelajs.co/api/v1/products";

/// Configuration for the remote product catalog API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
}

impl ApiConfig {
    /// Load the API configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: product listing endpoint (default: the public demo catalog)
    pub fn from_env() -> Self {
        let endpoint =
            env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Self { endpoint }
    }
}
