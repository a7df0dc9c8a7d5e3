use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    #[error("Catalog load failed: {0}")]
    DataLoad(String),

    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Image index {index} out of range (total: {total})")]
    ImageIndexOutOfRange { index: usize, total: usize },

    #[error("Failed to load image {path}: {reason}")]
    ImageLoad { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
