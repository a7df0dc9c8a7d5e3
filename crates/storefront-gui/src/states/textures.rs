use std::collections::HashMap;
use std::sync::mpsc;

use storefront_core::catalog::{ImageSlot, ProductCatalog};
use tracing::debug;

use crate::messages::WorkerCommand;

/// Longest side of decoded images.
const IMAGE_MAX_SIDE: u32 = 1600;

#[derive(Clone)]
pub enum TextureEntry {
    Pending,
    Ready(egui::TextureHandle),
    Failed,
}

/// Decoded images keyed by their catalog source string.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<String, TextureEntry>,
}

impl TextureCache {
    /// Current state of `source`, queueing a decode on first sight.
    ///
    /// Only local files are decoded. Remote sources fail straight away so the
    /// owning slot moves on to its fallbacks.
    pub fn request(
        &mut self,
        source: &str,
        catalog: &ProductCatalog,
        cmd_tx: &mpsc::Sender<WorkerCommand>,
    ) -> TextureEntry {
        if let Some(entry) = self.entries.get(source) {
            return entry.clone();
        }

        let entry = if source.starts_with("http://") || source.starts_with("https://") {
            debug!(source, "Remote image sources are not fetched");
            TextureEntry::Failed
        } else {
            let path = catalog.resolve_image(source);
            let queued = cmd_tx.send(WorkerCommand::LoadImage {
                key: source.to_string(),
                path,
                max_side: IMAGE_MAX_SIDE,
            });
            if queued.is_ok() {
                TextureEntry::Pending
            } else {
                TextureEntry::Failed
            }
        };
        self.entries.insert(source.to_string(), entry.clone());
        entry
    }

    /// Texture for a fallback chain. Sources already known to be broken are
    /// skipped by advancing the slot.
    pub fn slot_texture(
        &mut self,
        slot: &mut ImageSlot,
        catalog: &ProductCatalog,
        cmd_tx: &mpsc::Sender<WorkerCommand>,
    ) -> Option<egui::TextureHandle> {
        while let Some(source) = slot.current().map(str::to_string) {
            match self.request(&source, catalog, cmd_tx) {
                TextureEntry::Ready(handle) => return Some(handle),
                TextureEntry::Pending => return None,
                TextureEntry::Failed => {
                    slot.on_load_error(&source);
                }
            }
        }
        None
    }

    pub fn insert_ready(&mut self, key: String, handle: egui::TextureHandle) {
        self.entries.insert(key, TextureEntry::Ready(handle));
    }

    pub fn mark_failed(&mut self, key: String) {
        self.entries.insert(key, TextureEntry::Failed);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
