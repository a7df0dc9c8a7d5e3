mod criteria;

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Product, ProductCatalog};
use crate::consts::ALL_CATEGORIES;

pub use criteria::{FilterCriteria, PriceRange, RatingPolicy};

/// Result count for one category control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryAvailability {
    pub category: String,
    pub count: usize,
}

impl CategoryAvailability {
    /// Controls with no matching products are disabled.
    pub fn is_available(&self) -> bool {
        self.count > 0
    }
}

/// Listed products matching every predicate, in catalog order.
pub fn filter(catalog: &ProductCatalog, criteria: &FilterCriteria) -> Vec<Arc<Product>> {
    let query = criteria.normalized_query();
    let result: Vec<Arc<Product>> = catalog
        .products()
        .iter()
        .filter(|p| matches_except_category(p, criteria, &query))
        .filter(|p| matches_category(p, &criteria.category))
        .cloned()
        .collect();
    debug!(
        category = %criteria.category,
        query = %query,
        matched = result.len(),
        "Filter applied"
    );
    result
}

/// Per-category counts under the current search, price and rating
/// constraints, starting with the "all" sentinel and followed by the
/// catalog's categories in first-seen order.
pub fn availability(catalog: &ProductCatalog, criteria: &FilterCriteria) -> Vec<CategoryAvailability> {
    let query = criteria.normalized_query();
    let candidates: Vec<&Arc<Product>> = catalog
        .products()
        .iter()
        .filter(|p| matches_except_category(p, criteria, &query))
        .collect();

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(catalog.categories())
        .map(|category| {
            let count = candidates
                .iter()
                .filter(|p| matches_category(p, &category))
                .count();
            CategoryAvailability { category, count }
        })
        .collect()
}

/// Listing, search, price and rating predicates. `query` must already be
/// normalized.
fn matches_except_category(product: &Product, criteria: &FilterCriteria, query: &str) -> bool {
    product.is_listed()
        && matches_query(product, query)
        && criteria.price.contains(product.effective_price())
        && criteria.rating_policy.accepts(product.rating(), criteria.rating)
}

fn matches_category(product: &Product, category: &str) -> bool {
    if category == ALL_CATEGORIES {
        return true;
    }
    product.category.as_deref() == Some(category)
        || product
            .fabric
            .as_deref()
            .is_some_and(|fabric| fabric.contains(category))
}

fn matches_query(product: &Product, query: &str) -> bool {
    query.is_empty() || product.search_haystack().contains(query)
}
