use super::model::Product;
use super::value_objects::{CATEGORY_ALL, FilterCriteria};

/// Ceiling value that selects the upper price tier instead of acting as a
/// literal bound.
const TIER_CEILING: f64 = 100.0;
/// Lower bound of the upper price tier ("$50-$100+").
const TIER_FLOOR: f64 = 50.0;

/// Returns true if the product passes the category restriction.
///
/// Business rules:
/// - No category, or the `"All"` sentinel -> every product passes
/// - Otherwise -> exact, case-sensitive match on the category name
pub fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(name) if name == CATEGORY_ALL => true,
        Some(name) => product.category.name == name,
    }
}

/// Returns true if the product passes the price restriction.
///
/// Business rules:
/// - No ceiling -> every product passes
/// - Ceiling of exactly 100 -> keeps `price > 50` (the "$50-$100+" tier,
///   not a literal less-or-equal bound)
/// - Any other ceiling -> keeps `price <= ceiling`
pub fn matches_price_ceiling(product: &Product, price_max: Option<f64>) -> bool {
    match price_max {
        None => true,
        Some(ceiling) if ceiling == TIER_CEILING => product.price > TIER_FLOOR,
        Some(ceiling) => product.price <= ceiling,
    }
}

/// Applies the category and price restrictions together (logical AND),
/// preserving the input order.
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_category(product, criteria.category.as_deref()))
        .filter(|product| matches_price_ceiling(product, criteria.price_max))
        .cloned()
        .collect()
}
