use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BATCH_DELAY, BUTTON_CLICK_LIMIT, DOUBLE_TAP_WINDOW, DOUBLE_TAP_ZOOM, IMAGE_SWAP_DELAY,
    MAX_ZOOM, MIN_ZOOM, NARROW_BATCH_SIZE, NARROW_VIEWPORT_BREAKPOINT, SCROLL_PROXIMITY,
    SWIPE_THRESHOLD, WHEEL_ZOOM_STEP, WIDE_BATCH_SIZE,
};
use crate::filter::RatingPolicy;

/// Top-level storefront configuration, usually read from `storefront.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the catalog JSON. Image paths inside it resolve against its
    /// parent directory.
    pub data_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub rating_policy: RatingPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub wide_batch_size: usize,
    pub narrow_batch_size: usize,
    /// Viewport widths below this are narrow.
    pub narrow_breakpoint: f32,
    /// Manual activations before scroll mode takes over.
    pub click_threshold: usize,
    pub batch_delay_ms: u64,
    /// Distance from the page bottom that fires the next batch in scroll mode.
    pub scroll_proximity: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wide_batch_size: WIDE_BATCH_SIZE,
            narrow_batch_size: NARROW_BATCH_SIZE,
            narrow_breakpoint: NARROW_VIEWPORT_BREAKPOINT,
            click_threshold: BUTTON_CLICK_LIMIT,
            batch_delay_ms: BATCH_DELAY.as_millis() as u64,
            scroll_proximity: SCROLL_PROXIMITY,
        }
    }
}

impl RenderConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub swipe_threshold: f32,
    pub swap_delay_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            swap_delay_ms: IMAGE_SWAP_DELAY.as_millis() as u64,
        }
    }
}

impl GalleryConfig {
    pub fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub wheel_step: f32,
    pub double_tap_zoom: f32,
    pub double_tap_window_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_step: WHEEL_ZOOM_STEP,
            double_tap_zoom: DOUBLE_TAP_ZOOM,
            double_tap_window_ms: DOUBLE_TAP_WINDOW.as_millis() as u64,
        }
    }
}

impl ViewerConfig {
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub shop_name: String,
    /// Chat recipient, international format without `+`.
    pub phone_number: String,
    /// Public origin used to build product links in the prefilled message.
    pub site_url: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shop_name: "Dashami Silks".into(),
            phone_number: "918904528959".into(),
            site_url: "https://dashamisilks.com".into(),
        }
    }
}
