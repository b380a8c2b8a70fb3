use std::hash::{Hash, Hasher};

use crate::domain::shared::value_objects::ProductId;

/// Category a product belongs to, as reported by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One catalog entry. Immutable once constructed: instances are created when
/// a fetch response is decoded and replaced wholesale on the next fetch.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: Category,
    pub images: Vec<String>,
}

/// Identity is the externally assigned id: two records with the same id are
/// the same entity regardless of their other fields.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
