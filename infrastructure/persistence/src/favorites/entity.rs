use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use business::domain::catalog::repository::FavoritesMap;
use business::domain::shared::value_objects::ProductId;

/// Stored form of the favorites mapping: decimal-string product ids to
/// booleans, the shape the durable key/value namespace holds.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FavoritesEntity(pub HashMap<String, bool>);

impl FavoritesEntity {
    /// Converts into the domain mapping. Stored keys that do not parse back
    /// to an integer id are silently dropped.
    pub fn into_domain(self) -> FavoritesMap {
        self.0
            .into_iter()
            .filter_map(|(key, flag)| key.parse::<ProductId>().ok().map(|id| (id, flag)))
            .collect()
    }

    pub fn from_domain(favorites: &FavoritesMap) -> Self {
        Self(
            favorites
                .iter()
                .map(|(id, flag)| (id.to_string(), *flag))
                .collect(),
        )
    }
}
