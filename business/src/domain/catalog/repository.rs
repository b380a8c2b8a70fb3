use std::collections::HashMap;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

/// Favorite state per product id. Absence of an id means "not favorite";
/// entries that flip back to false are kept rather than removed.
pub type FavoritesMap = HashMap<ProductId, bool>;

/// Port for the durable favorites store: one key/value namespace holding the
/// whole mapping. Synchronous on purpose, the save runs inline with each
/// toggle on the single writer context.
pub trait FavoritesRepository: Send + Sync {
    /// Reads the persisted mapping. An absent or corrupt store degrades to
    /// an empty mapping; it never fails the caller.
    fn load(&self) -> FavoritesMap;

    /// Overwrites the persisted mapping. A load ordered after a completed
    /// save must observe the full mapping, never a partial write.
    fn save(&self, favorites: &FavoritesMap) -> Result<(), RepositoryError>;
}
