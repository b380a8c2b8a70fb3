use std::env;
use std::path::PathBuf;

use persistence::store::StoreConfig;

/// Resolve the favorites store location
///
/// Environment variables:
/// - CATALOG_FAVORITES_FILE: explicit store file path
///   (default: `catalog/favorites.json` under the platform data directory)
pub fn from_env() -> anyhow::Result<StoreConfig> {
    match env::var("CATALOG_FAVORITES_FILE") {
        Ok(path) => Ok(StoreConfig::new(PathBuf::from(path))),
        Err(_) => Ok(StoreConfig::default_location()?),
    }
}
