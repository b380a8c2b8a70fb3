use serde::Deserialize;

use business::domain::catalog::errors::FetchError;
use business::domain::catalog::model::{Category, Product};
use business::domain::shared::value_objects::ProductId;

/// Wire shape of a category in the catalog API response.
#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
}

/// Wire shape of a product in the catalog API response.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category: CategoryRecord,
    pub images: Vec<String>,
}

impl ProductRecord {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            title: self.title,
            price: self.price,
            category: Category::new(self.category.name),
            images: self.images,
        }
    }
}

/// Decodes a raw response body into domain products, keeping server order.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    let records: Vec<ProductRecord> = serde_json::from_slice(body).map_err(|error| {
        FetchError::Decode {
            cause: error.to_string(),
        }
    })?;

    Ok(records.into_iter().map(ProductRecord::into_domain).collect())
}
