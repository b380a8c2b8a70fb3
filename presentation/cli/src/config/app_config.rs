use persistence::store::StoreConfig;

use super::api_config::ApiConfig;
use super::store_config;

pub struct AppConfig {
    pub api: ApiConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api: ApiConfig::from_env(),
            store: store_config::from_env()?,
        })
    }
}
