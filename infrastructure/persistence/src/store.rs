use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.data_dir_unavailable")]
    DataDirUnavailable,
}

/// Configuration for the favorites store file
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// Creates a store configuration for an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the default store file under the platform data directory
    pub fn default_location() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::DataDirUnavailable)?;
        Ok(Self {
            path: data_dir.join("catalog").join("favorites.json"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_the_explicit_path_as_given() {
        let config = StoreConfig::new("/tmp/favorites.json");

        assert_eq!(config.path, PathBuf::from("/tmp/favorites.json"));
    }
}
