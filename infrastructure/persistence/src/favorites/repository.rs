use std::fs;
use std::path::PathBuf;

use tracing::warn;

use business::domain::catalog::repository::{FavoritesMap, FavoritesRepository};
use business::domain::errors::RepositoryError;

use super::entity::FavoritesEntity;
use crate::store::StoreConfig;

/// Favorites store backed by a single JSON file.
pub struct FavoritesRepositoryFile {
    path: PathBuf,
}

impl FavoritesRepositoryFile {
    pub fn new(config: StoreConfig) -> Self {
        Self { path: config.path }
    }
}

impl FavoritesRepository for FavoritesRepositoryFile {
    fn load(&self) -> FavoritesMap {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // a store that was never written means no favorites
            Err(_) => return FavoritesMap::new(),
        };

        match serde_json::from_str::<FavoritesEntity>(&raw) {
            Ok(entity) => entity.into_domain(),
            Err(error) => {
                warn!(
                    "Discarding corrupt favorites store at {:?}: {}",
                    self.path, error
                );
                FavoritesMap::new()
            }
        }
    }

    fn save(&self, favorites: &FavoritesMap) -> Result<(), RepositoryError> {
        let entity = FavoritesEntity::from_domain(favorites);
        let json =
            serde_json::to_string_pretty(&entity).map_err(|_| RepositoryError::Serialization)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|_| RepositoryError::Persistence)?;
        }

        // Write-then-rename: a load ordered after an interrupted save never
        // observes a half-written mapping.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|_| RepositoryError::Persistence)?;
        fs::rename(&tmp, &self.path).map_err(|_| RepositoryError::Persistence)
    }
}
