use std::path::PathBuf;

use storefront_core::catalog::ProductCatalog;
use storefront_core::config::StorefrontConfig;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and parse the catalog file.
    LoadCatalog { path: PathBuf },

    /// Decode one image, downscaled so neither side exceeds `max_side`.
    LoadImage {
        key: String,
        path: PathBuf,
        max_side: u32,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    CatalogLoading {
        path: PathBuf,
    },
    CatalogLoaded {
        path: PathBuf,
        catalog: ProductCatalog,
    },
    CatalogFailed {
        path: PathBuf,
        message: String,
    },

    ImageDecoded {
        key: String,
        image: egui::ColorImage,
    },
    ImageFailed {
        key: String,
        message: String,
    },

    ConfigImported {
        config: StorefrontConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
