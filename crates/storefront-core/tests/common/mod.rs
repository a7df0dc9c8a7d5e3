#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use storefront_core::catalog::{Product, ProductCatalog};
use storefront_core::render::RendererSettings;
use tempfile::TempDir;

/// A listed product with the given id, category and effective price.
pub fn product(id: &str, category: &str, price: u64) -> Product {
    Product {
        id: id.to_string(),
        name: Some(format!("Product {id}")),
        category: Some(category.to_string()),
        price: Some(price),
        visible: true,
        ..Product::default()
    }
}

/// A listed product with a star rating.
pub fn rated(id: &str, stars: u8) -> Product {
    Product {
        stars: Some(stars),
        ..product(id, "Saree", 1000)
    }
}

pub fn catalog_of(products: Vec<Product>) -> ProductCatalog {
    ProductCatalog::new(products)
}

/// `count` listed sarees with ids `p0`, `p1`, ...
pub fn numbered_catalog(count: usize) -> ProductCatalog {
    catalog_of(
        (0..count)
            .map(|i| product(&format!("p{i}"), "Saree", 1000 + i as u64))
            .collect(),
    )
}

/// Renderer settings with one batch size for every viewport.
pub fn settings(batch: usize, delay: Duration) -> RendererSettings {
    RendererSettings {
        wide_batch_size: batch,
        narrow_batch_size: batch,
        delay,
        ..RendererSettings::default()
    }
}

/// A small hand-edited style payload with loosely typed fields.
pub const SAMPLE_CATALOG: &str = r#"[
  {
    "id": "DS-101",
    "name": "Kanjivaram Bridal",
    "category": "Saree",
    "fabric": "Pure Silk",
    "color": "Maroon",
    "price": 12000,
    "discount_price": 9999,
    "stock": "Ready to Ship",
    "stars": 5,
    "visible": true,
    "deleted": false,
    "image": "product_images/ds101.jpg",
    "gallery": ["product_images/ds101_b.jpg", "", "product_images/ds101_c.jpg"],
    "reviews": ["Stunning drape"]
  },
  {
    "id": 102,
    "name": "Cotton Kurta Set",
    "category": "Kurta",
    "fabric": "Cotton",
    "price": "1800",
    "discount_price": 0,
    "stars": "4",
    "visible": "true",
    "image_hd": "product_images/102_hd.jpg"
  },
  {
    "id": "DS-103",
    "name": "Hidden Saree",
    "category": "Saree",
    "price": 3000,
    "visible": false
  },
  {
    "id": "DS-104",
    "name": "Removed Dupatta",
    "category": "Dupatta",
    "price": 900,
    "visible": true,
    "deleted": true
  },
  "not a product",
  {
    "id": "DS-105",
    "category": "Saree",
    "fabric": "Tussar Silk",
    "visible": 1,
    "stock": "Sold Out",
    "desc": "Handwoven in Bhagalpur. Light and airy."
  }
]"#;

pub fn sample_catalog() -> ProductCatalog {
    ProductCatalog::from_json_str(SAMPLE_CATALOG).expect("sample catalog parses")
}

/// Write `contents` to `name` inside a fresh temp directory.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
