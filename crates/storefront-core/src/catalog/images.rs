use tracing::warn;

use crate::consts::{PLACEHOLDER_IMAGE, SECONDARY_PLACEHOLDER_IMAGE};

/// Where an [`ImageSlot`] stands in its fallback chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    /// Showing the requested image.
    Original,
    /// Showing one of the placeholder assets.
    Placeholder,
    /// Every source failed. Nothing further is attempted.
    Exhausted,
}

/// An image reference with an ordered fallback chain.
///
/// Each load failure advances the chain by one step. Once the chain is
/// exhausted further failures are ignored, so a failing placeholder can never
/// loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSlot {
    chain: Vec<String>,
    /// Number of entries in `chain` that are the product's own images.
    originals: usize,
    position: usize,
}

impl ImageSlot {
    /// Card image: primary, then HD, then the placeholder.
    pub fn card(image: Option<&str>, image_hd: Option<&str>) -> Self {
        let originals: Vec<&str> = [image, image_hd].into_iter().flatten().collect();
        Self::with_placeholders(&originals, &[PLACEHOLDER_IMAGE])
    }

    /// Product-page image: the source, then both placeholder assets.
    pub fn detail(source: &str) -> Self {
        Self::with_placeholders(&[source], &[PLACEHOLDER_IMAGE, SECONDARY_PLACEHOLDER_IMAGE])
    }

    fn with_placeholders(originals: &[&str], placeholders: &[&str]) -> Self {
        let mut chain: Vec<String> = Vec::with_capacity(originals.len() + placeholders.len());
        for source in originals.iter().filter(|s| !s.trim().is_empty()) {
            if !chain.iter().any(|c| c == source) {
                chain.push(source.to_string());
            }
        }
        let originals = chain.len();
        for placeholder in placeholders {
            if !chain.iter().any(|c| c == placeholder) {
                chain.push(placeholder.to_string());
            }
        }
        Self {
            chain,
            originals,
            position: 0,
        }
    }

    /// Source to display, or `None` once every fallback has failed.
    pub fn current(&self) -> Option<&str> {
        self.chain.get(self.position).map(String::as_str)
    }

    pub fn status(&self) -> ImageStatus {
        if self.position >= self.chain.len() {
            ImageStatus::Exhausted
        } else if self.position < self.originals {
            ImageStatus::Original
        } else {
            ImageStatus::Placeholder
        }
    }

    /// Record that `failed` could not be loaded and return the next source.
    ///
    /// Reports for a source other than the current one are stale and ignored,
    /// which keeps the call idempotent when a failure is reported twice.
    pub fn on_load_error(&mut self, failed: &str) -> Option<&str> {
        if self.current() != Some(failed) {
            return self.current();
        }
        self.position += 1;
        match self.current() {
            Some(next) => warn!(failed, next, "Image failed, using fallback"),
            None => warn!(failed, "Image failed, no fallback left"),
        }
        self.current()
    }
}
