mod stage;
mod swipe;

use crate::catalog::Product;
use crate::consts::PLACEHOLDER_IMAGE;
use crate::error::{Result, StorefrontError};

pub use stage::StageTransition;
pub(crate) use swipe::classify as swipe_direction;
pub use swipe::{SwipeDirection, SwipeTracker};

/// Arrow keys bound to gallery navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// One discrete navigation gesture. Each physical gesture is delivered as
/// exactly one input, so a swipe and an arrow key never both move the index
/// for the same action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryInput {
    Key(ArrowKey),
    Swipe(SwipeDirection),
}

/// Ordered image set of one product and the index being shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryController {
    images: Vec<String>,
    current: usize,
}

impl GalleryController {
    pub fn new(images: Vec<String>) -> Self {
        let mut gallery = Self::default();
        gallery.set_images(images);
        gallery
    }

    /// Gallery of a product: its primary image (falling back to HD, then the
    /// placeholder) followed by the extra gallery images.
    pub fn for_product(product: &Product) -> Self {
        let main = product.primary_image().unwrap_or(PLACEHOLDER_IMAGE);
        let images = std::iter::once(main)
            .chain(product.gallery.iter().map(String::as_str))
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self::new(images)
    }

    /// Replace the image set and return to the first image.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        self.current = 0;
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_source(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Advance with wraparound. Returns `true` when the index moved.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Retreat with wraparound. Returns `true` when the index moved.
    pub fn prev(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, direction: isize) -> bool {
        let len = self.images.len();
        if len <= 1 {
            return false;
        }
        self.current = (self.current as isize + direction).rem_euclid(len as isize) as usize;
        true
    }

    /// Show image `index`. Out-of-range indices are rejected and leave the
    /// gallery unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.images.len() {
            return Err(StorefrontError::ImageIndexOutOfRange {
                index,
                total: self.images.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Apply a navigation gesture. Returns `true` when the index moved.
    pub fn apply_input(&mut self, input: GalleryInput) -> bool {
        match input {
            GalleryInput::Key(ArrowKey::Right) | GalleryInput::Swipe(SwipeDirection::Next) => {
                self.next()
            }
            GalleryInput::Key(ArrowKey::Left) | GalleryInput::Swipe(SwipeDirection::Prev) => {
                self.prev()
            }
        }
    }

    /// "3 / 5" style position label.
    pub fn counter_label(&self) -> String {
        if self.images.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.images.len())
    }
}
