use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use storefront_core::catalog::ImageSlot;
use storefront_core::session::{CatalogSession, ProductPage};

/// Whether the catalog fetch has resolved. Nothing is filtered or rendered
/// until it is `Ready`.
pub enum CatalogState {
    Loading { path: PathBuf },
    Failed { path: PathBuf, message: String },
    Ready(Box<CatalogSession>),
}

impl CatalogState {
    pub fn session(&self) -> Option<&CatalogSession> {
        match self {
            Self::Ready(session) => Some(&**session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut CatalogSession> {
        match self {
            Self::Ready(session) => Some(&mut **session),
            _ => None,
        }
    }
}

pub enum Page {
    Browse,
    Product(Box<ProductPage>),
    NotFound { id: String },
}

/// Per-session state of the product grid.
#[derive(Default)]
pub struct GridState {
    /// Filter generation the scroll position belongs to.
    pub seen_generation: u64,
    pub last_offset: f32,
    /// Card image fallback chains by product id.
    pub card_images: HashMap<String, ImageSlot>,
}

impl GridState {
    pub fn reset(&mut self) {
        self.seen_generation = 0;
        self.last_offset = 0.0;
        self.card_images.clear();
    }
}

/// Active touch points of the fullscreen viewer, used to derive the pinch
/// distance.
#[derive(Default)]
pub struct TouchTracker {
    points: BTreeMap<u64, egui::Pos2>,
    touched: bool,
}

impl TouchTracker {
    pub fn update(&mut self, id: u64, pos: egui::Pos2, phase: egui::TouchPhase) {
        match phase {
            egui::TouchPhase::Start | egui::TouchPhase::Move => {
                self.touched = true;
                self.points.insert(id, pos);
            }
            egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                self.points.remove(&id);
            }
        }
    }

    /// Distance between the first two touch points.
    pub fn pinch_distance(&self) -> Option<f32> {
        let mut points = self.points.values();
        let a = points.next()?;
        let b = points.next()?;
        Some(a.distance(*b))
    }

    /// Whether a touch was seen since the last call.
    pub fn take_touched(&mut self) -> bool {
        std::mem::take(&mut self.touched)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.touched = false;
    }
}
