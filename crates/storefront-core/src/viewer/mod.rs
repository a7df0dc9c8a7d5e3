pub mod zoom;

use tracing::debug;

pub use zoom::{
    pinched_zoom, DragMode, DragRelease, Offset, TapOutcome, ZoomLimits, ZoomPanController,
};

/// One fullscreen viewing session over the gallery's current image.
///
/// Zoom state never outlives a session or a slide: opening, closing and
/// changing slides all start from a fresh [`ZoomPanController`] state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerSession {
    zoom: ZoomPanController,
    open: bool,
}

impl ViewerSession {
    pub fn new(zoom: ZoomPanController) -> Self {
        Self { zoom, open: false }
    }

    pub fn open(&mut self) {
        self.zoom.reset();
        self.open = true;
        debug!("Viewer opened");
    }

    pub fn close(&mut self) {
        self.open = false;
        self.zoom.reset();
        debug!("Viewer closed");
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The gallery moved to another image.
    pub fn on_slide_change(&mut self) {
        self.zoom.reset();
    }

    pub fn zoom(&self) -> &ZoomPanController {
        &self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut ZoomPanController {
        &mut self.zoom
    }
}
