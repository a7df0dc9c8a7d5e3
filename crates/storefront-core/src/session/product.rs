use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::catalog::{ImageSlot, Product, ProductCatalog};
use crate::checkout::{product_page_url, CheckoutHandoff};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::gallery::{GalleryController, GalleryInput, StageTransition, SwipeTracker};
use crate::viewer::{DragMode, DragRelease, Offset, TapOutcome, ViewerSession, ZoomPanController};

/// State of one product detail page.
pub struct ProductPage {
    product: Arc<Product>,
    gallery: GalleryController,
    slots: Vec<ImageSlot>,
    stage: StageTransition,
    swipe: SwipeTracker,
    viewer: ViewerSession,
    page_url: String,
    checkout_url: String,
}

impl ProductPage {
    /// Open the page for product `id`.
    pub fn open(
        catalog: &ProductCatalog,
        id: &str,
        config: &StorefrontConfig,
        handoff: &dyn CheckoutHandoff,
    ) -> Result<Self> {
        let product = catalog.find(id)?;
        let gallery = GalleryController::for_product(&product);
        let slots = gallery.images().iter().map(|s| ImageSlot::detail(s)).collect();
        let page_url = product_page_url(&config.checkout.site_url, &product.id);
        let checkout_url = handoff.handoff_url(&product, &page_url);
        let zoom = ZoomPanController::new(&config.viewer, config.gallery.swipe_threshold);

        info!(id = %product.id, images = gallery.len(), "Product page opened");
        Ok(Self {
            product,
            gallery,
            slots,
            stage: StageTransition::new(config.gallery.swap_delay()),
            swipe: SwipeTracker::new(config.gallery.swipe_threshold),
            viewer: ViewerSession::new(zoom),
            page_url,
            checkout_url,
        })
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    pub fn stage(&self) -> &StageTransition {
        &self.stage
    }

    pub fn viewer(&self) -> &ViewerSession {
        &self.viewer
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn checkout_url(&self) -> &str {
        &self.checkout_url
    }

    /// Apply one navigation gesture. Returns `true` when the slide changed.
    pub fn navigate(&mut self, input: GalleryInput, now: Instant) -> bool {
        let moved = self.gallery.apply_input(input);
        if moved {
            self.after_slide_change(now);
        }
        moved
    }

    /// Thumbnail click. Out-of-range indices are rejected.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Result<()> {
        let before = self.gallery.current_index();
        self.gallery.jump_to(index)?;
        if self.gallery.current_index() != before {
            self.after_slide_change(now);
        }
        Ok(())
    }

    fn after_slide_change(&mut self, now: Instant) {
        self.stage.request(self.gallery.current_index(), now);
        if self.viewer.is_open() {
            self.viewer.on_slide_change();
        }
    }

    /// Advance the image swap timer. Returns `true` when the stage changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.stage.poll(now).is_some()
    }

    /// Drag started on the main image stage.
    pub fn stage_drag_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Drag ended on the main image stage. Swipes navigate; taps do not.
    pub fn stage_drag_end(&mut self, x: f32, now: Instant) -> bool {
        match self.swipe.finish(x) {
            Some(direction) => self.navigate(GalleryInput::Swipe(direction), now),
            None => false,
        }
    }

    pub fn open_viewer(&mut self) {
        self.swipe.cancel();
        self.viewer.open();
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    pub fn viewer_wheel(&mut self, delta: f32) -> f32 {
        self.viewer.zoom_mut().wheel_zoom(delta)
    }

    pub fn viewer_scroll(&mut self, points: f32) -> f32 {
        self.viewer.zoom_mut().scroll_zoom(points)
    }

    pub fn viewer_pinch_start(&mut self, distance: f32) {
        self.viewer.zoom_mut().pinch_start(distance);
    }

    pub fn viewer_pinch_update(&mut self, distance: f32) -> f32 {
        self.viewer.zoom_mut().pinch_update(distance)
    }

    pub fn viewer_pinch_end(&mut self) {
        self.viewer.zoom_mut().pinch_end();
    }

    pub fn viewer_drag_start(&mut self, pos: Offset) -> Option<DragMode> {
        self.viewer.zoom_mut().drag_start(pos)
    }

    pub fn viewer_drag_move(&mut self, pos: Offset) -> Offset {
        self.viewer.zoom_mut().drag_move(pos)
    }

    /// Release a viewer drag. An unzoomed swipe navigates the gallery, which
    /// also resets the zoom for the new slide.
    pub fn viewer_drag_end(&mut self, pos: Offset, now: Instant) -> DragRelease {
        let release = self.viewer.zoom_mut().drag_end(pos);
        if let DragRelease::Swipe(direction) = release {
            self.navigate(GalleryInput::Swipe(direction), now);
        }
        release
    }

    /// A touch tap. Two taps inside the double-tap window toggle the zoom.
    pub fn viewer_tap(&mut self, now: Instant) -> TapOutcome {
        self.viewer.zoom_mut().tap(now)
    }

    /// A mouse click toggles the zoom on its own.
    pub fn viewer_click(&mut self) -> f32 {
        self.viewer.zoom_mut().toggle_zoom()
    }

    /// Fallback chain of gallery image `index`.
    pub fn image_slot(&self, index: usize) -> Option<&ImageSlot> {
        self.slots.get(index)
    }

    /// Source currently painted on the stage, which may lag the gallery index
    /// while the swap fades.
    pub fn stage_source(&self) -> Option<&str> {
        self.slots.get(self.stage.displayed())?.current()
    }

    /// Source of the viewer, which always follows the gallery index.
    pub fn viewer_source(&self) -> Option<&str> {
        self.slots.get(self.gallery.current_index())?.current()
    }

    /// Report that `failed` could not be loaded for gallery image `index`.
    pub fn on_image_error(&mut self, index: usize, failed: &str) -> Option<&str> {
        self.slots.get_mut(index)?.on_load_error(failed)
    }
}
