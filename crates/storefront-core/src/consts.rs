use std::time::Duration;

/// Category sentinel that disables the category predicate.
pub const ALL_CATEGORIES: &str = "all";

/// Stock label shown when a product carries none.
pub const DEFAULT_STOCK: &str = "Ready to Ship";

/// Stock label that marks a product as unavailable.
pub const SOLD_OUT_STOCK: &str = "Sold Out";

/// Colour shown when a product carries none.
pub const DEFAULT_COLOR: &str = "Multi";

/// Category shown when a product carries none.
pub const DEFAULT_CATEGORY: &str = "Saree";

/// Fabric shown when a product carries none.
pub const DEFAULT_FABRIC: &str = "Silk";

/// Name shown when a product carries none.
pub const DEFAULT_NAME: &str = "Unknown Product";

/// Description shown when a product carries none.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Card quote used when a product has neither reviews nor a description.
pub const DEFAULT_REVIEW_SNIPPET: &str =
    "\"Absolutely stunning quality. The zari work is real gold.\"";

/// Star count shown when a product carries none. Filtering treats a missing
/// rating as 0 instead.
pub const DEFAULT_DISPLAY_STARS: u8 = 5;

/// Highest star rating a product can carry.
pub const MAX_STARS: u8 = 5;

/// Primary placeholder image, relative to the catalog directory.
pub const PLACEHOLDER_IMAGE: &str = "logo/logo.png";

/// Last-resort placeholder used on the product page when the primary
/// placeholder itself fails.
pub const SECONDARY_PLACEHOLDER_IMAGE: &str = "product_images/logo_circle.png";

/// Price slider ceiling used when no product carries a price.
pub const DEFAULT_PRICE_CEILING: u64 = 10_000;

/// Headroom added above the highest catalog price on the price slider, and
/// the minimum gap kept between the two slider handles.
pub const PRICE_SLIDER_STEP: u64 = 500;

/// Batch size for wide viewports.
pub const WIDE_BATCH_SIZE: usize = 50;

/// Batch size for narrow (mobile-class) viewports.
pub const NARROW_BATCH_SIZE: usize = 20;

/// Viewport widths below this (logical px) are narrow.
pub const NARROW_VIEWPORT_BREAKPOINT: f32 = 768.0;

/// Manual load-more activations required before switching to scroll mode.
pub const BUTTON_CLICK_LIMIT: usize = 2;

/// Loading indicator window before a batch is appended.
pub const BATCH_DELAY: Duration = Duration::from_millis(300);

/// Distance from the page bottom (logical px) that triggers the next batch in
/// scroll mode.
pub const SCROLL_PROXIMITY: f32 = 500.0;

/// Horizontal drag distance (logical px) that counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Fade window of the main product image swap.
pub const IMAGE_SWAP_DELAY: Duration = Duration::from_millis(150);

/// Lower zoom bound of the fullscreen viewer.
pub const MIN_ZOOM: f32 = 1.0;

/// Upper zoom bound of the fullscreen viewer.
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom change per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.25;

/// Scroll distance (logical px) that counts as one wheel notch.
pub const WHEEL_NOTCH_POINTS: f32 = 50.0;

/// Zoom level a double tap toggles to.
pub const DOUBLE_TAP_ZOOM: f32 = 2.5;

/// Two taps closer together than this are a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Pinch baselines shorter than this (logical px) are ignored.
pub const MIN_PINCH_DISTANCE: f32 = 1.0;
