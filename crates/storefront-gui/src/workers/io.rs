use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use storefront_core::catalog::ProductCatalog;
use storefront_core::error::{Result, StorefrontError};
use tracing::{debug, error};

use crate::convert::rgba_to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_load_catalog(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send(
        tx,
        ctx,
        WorkerResult::CatalogLoading {
            path: path.to_path_buf(),
        },
    );

    let start = Instant::now();
    match ProductCatalog::load(path) {
        Ok(catalog) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Loaded {} products from {} in {}ms",
                    catalog.len(),
                    path.display(),
                    start.elapsed().as_millis()
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::CatalogLoaded {
                    path: path.to_path_buf(),
                    catalog,
                },
            );
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Catalog load failed");
            send(
                tx,
                ctx,
                WorkerResult::CatalogFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                },
            );
        }
    }
}

pub(super) fn handle_load_image(
    key: String,
    path: &Path,
    max_side: u32,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match decode_image(path, max_side) {
        Ok(image) => send(tx, ctx, WorkerResult::ImageDecoded { key, image }),
        Err(e) => {
            debug!(key = %key, error = %e, "Image decode failed");
            send(
                tx,
                ctx,
                WorkerResult::ImageFailed {
                    key,
                    message: e.to_string(),
                },
            );
        }
    }
}

fn decode_image(path: &Path, max_side: u32) -> Result<egui::ColorImage> {
    let img = image::open(path).map_err(|e| StorefrontError::ImageLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let img = if img.width() > max_side || img.height() > max_side {
        img.thumbnail(max_side, max_side)
    } else {
        img
    };
    Ok(rgba_to_color_image(&img.to_rgba8()))
}
