pub mod images;
mod lenient;
pub mod product;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::consts::{DEFAULT_PRICE_CEILING, PRICE_SLIDER_STEP};
use crate::error::{Result, StorefrontError};

pub use images::{ImageSlot, ImageStatus};
pub use product::Product;

/// The immutable product set of one session, in source order.
#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
    products: Vec<Arc<Product>>,
    base_dir: Option<PathBuf>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
            base_dir: None,
        }
    }

    /// Parse a catalog payload: a JSON array of product records.
    ///
    /// A payload that is not a JSON array fails the whole load. A single
    /// record that cannot be decoded is skipped with a warning.
    pub fn from_json_str(payload: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(payload)?;
        let total = records.len();
        let mut products = Vec::with_capacity(total);

        for (index, record) in records.into_iter().enumerate() {
            if !record.is_object() {
                warn!(index, "Skipping catalog record that is not an object");
                continue;
            }
            match serde_json::from_value::<Product>(record) {
                Ok(product) => products.push(product),
                Err(e) => warn!(index, error = %e, "Skipping malformed catalog record"),
            }
        }

        info!(
            records = total,
            products = products.len(),
            "Catalog parsed"
        );
        Ok(Self::new(products))
    }

    /// Read and parse a catalog file. Relative image paths resolve against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let payload = std::fs::read_to_string(path)?;
        if payload.trim().is_empty() {
            return Err(StorefrontError::DataLoad(format!(
                "{} is empty",
                path.display()
            )));
        }
        let mut catalog = Self::from_json_str(&payload)?;
        catalog.base_dir = path.parent().map(Path::to_path_buf);
        info!(path = %path.display(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Resolve an image reference against the catalog directory.
    pub fn resolve_image(&self, source: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(source),
            None => PathBuf::from(source),
        }
    }

    /// Look up a product by id. Unlisted products are still found; the
    /// product page decides how to present them.
    pub fn find(&self, id: &str) -> Result<Arc<Product>> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StorefrontError::ProductNotFound { id: id.to_string() })
    }

    /// Distinct categories of listed products, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.products.iter().filter(|p| p.is_listed()) {
            if let Some(category) = &product.category {
                if !categories.iter().any(|c| c == category) {
                    categories.push(category.clone());
                }
            }
        }
        categories
    }

    /// Upper end of the price slider: the highest effective price plus one
    /// slider step of headroom.
    pub fn price_ceiling(&self) -> u64 {
        let highest = self
            .products
            .iter()
            .map(|p| p.effective_price())
            .max()
            .unwrap_or(0);
        let highest = if highest == 0 {
            DEFAULT_PRICE_CEILING
        } else {
            highest
        };
        highest + PRICE_SLIDER_STEP
    }
}
