//! Incremental disclosure of a filtered result.
//!
//! A [`BatchRenderer`] reveals its items one batch at a time. The first few
//! batches after a filter change are gated behind a manual "load more"
//! control; once the control has been used often enough the renderer
//! switches to scroll mode, where proximity to the page bottom fires the next
//! batch. Every batch passes through a short cancellable loading window
//! before it is appended.

mod listener;
mod settings;

use std::ops::Range;
use std::time::Instant;

use tracing::debug;

use listener::ScrollListener;

pub use settings::{RendererSettings, ViewportClass};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Loading,
    Exhausted,
}

impl std::fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// What drives the next batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    Button,
    InfiniteScroll,
}

/// Outcome of asking for another batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchRequest {
    /// Nothing to do, or a batch is already in flight.
    Ignored,
    /// The loading window is open; the batch lands once `due` has passed.
    Scheduled { due: Instant },
    /// No loading window configured; the batch was appended immediately.
    Committed(Range<usize>),
}

/// Scroll position of the page hosting the rendered output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Offset of the viewport's bottom edge from the top of the content.
    pub viewport_bottom: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn distance_to_bottom(&self) -> f32 {
        (self.content_height - self.viewport_bottom).max(0.0)
    }
}

/// Read-only view of the rendered output surface.
#[derive(Debug, PartialEq)]
pub enum RenderedView<'a, T> {
    /// The filtered result was empty.
    Placeholder,
    Items(&'a [T]),
}

pub struct BatchRenderer<T> {
    settings: RendererSettings,
    viewport: ViewportClass,
    items: Vec<T>,
    rendered: Vec<T>,
    loaded_count: usize,
    phase: RenderPhase,
    mode: TriggerMode,
    manual_activations: usize,
    control_visible: bool,
    pending: Option<Instant>,
    listener: ScrollListener,
}

impl<T: Clone> BatchRenderer<T> {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            viewport: ViewportClass::Wide,
            items: Vec::new(),
            rendered: Vec::new(),
            loaded_count: 0,
            phase: RenderPhase::Exhausted,
            mode: TriggerMode::Button,
            manual_activations: 0,
            control_visible: false,
            pending: None,
            listener: ScrollListener::default(),
        }
    }

    /// Start a new filter session over `items`.
    ///
    /// The pending batch timer is cancelled before any bookkeeping is reset,
    /// so a batch scheduled for the previous result can never land at an
    /// offset of the new one.
    pub fn reset(&mut self, items: Vec<T>) {
        self.pending = None;
        self.listener.detach();
        self.mode = TriggerMode::Button;
        self.manual_activations = 0;
        self.control_visible = false;
        self.rendered.clear();
        self.loaded_count = 0;
        self.items = items;
        self.phase = if self.items.is_empty() {
            RenderPhase::Exhausted
        } else {
            RenderPhase::Idle
        };
        debug!(total = self.items.len(), "Renderer reset");
    }

    /// Begin loading the next batch.
    pub fn request_next_batch(&mut self, now: Instant) -> BatchRequest {
        if self.phase != RenderPhase::Idle || self.loaded_count >= self.items.len() {
            return BatchRequest::Ignored;
        }
        self.phase = RenderPhase::Loading;
        self.control_visible = false;

        let delay = self.settings.delay;
        if delay.is_zero() {
            return BatchRequest::Committed(self.commit());
        }
        let due = now + delay;
        self.pending = Some(due);
        BatchRequest::Scheduled { due }
    }

    /// Fire the loading timer if it is due. Returns the appended range.
    pub fn poll(&mut self, now: Instant) -> Option<Range<usize>> {
        match self.pending {
            Some(due) if now >= due => {
                self.pending = None;
                Some(self.commit())
            }
            _ => None,
        }
    }

    /// The manual "load more" control was used.
    pub fn activate_manual(&mut self, now: Instant) -> BatchRequest {
        if self.mode != TriggerMode::Button || !self.control_visible {
            return BatchRequest::Ignored;
        }
        self.manual_activations += 1;
        self.request_next_batch(now)
    }

    /// The page scrolled. Only acts in scroll mode, and only near the bottom.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now: Instant) -> BatchRequest {
        if self.mode != TriggerMode::InfiniteScroll || !self.listener.is_attached() {
            return BatchRequest::Ignored;
        }
        if metrics.distance_to_bottom() > self.settings.scroll_proximity {
            return BatchRequest::Ignored;
        }
        self.request_next_batch(now)
    }

    /// Track the viewport width class. Only batches appended afterwards use
    /// the new size. Returns `true` when the class changed.
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        let class = self.settings.classify(width);
        if class == self.viewport {
            return false;
        }
        debug!(?class, batch_size = self.settings.batch_size(class), "Viewport class changed");
        self.viewport = class;
        true
    }

    fn commit(&mut self) -> Range<usize> {
        let total = self.items.len();
        let start = self.loaded_count.min(total);
        let end = (start + self.batch_size()).min(total);
        self.rendered.extend_from_slice(&self.items[start..end]);
        self.loaded_count = end;

        if self.loaded_count < total {
            self.phase = RenderPhase::Idle;
            if self.manual_activations >= self.settings.click_threshold {
                self.mode = TriggerMode::InfiniteScroll;
                self.control_visible = false;
                self.listener.attach();
            } else {
                self.control_visible = true;
            }
        } else {
            self.phase = RenderPhase::Exhausted;
            self.control_visible = false;
            self.listener.detach();
        }

        debug!(
            start,
            end,
            total,
            phase = %self.phase,
            "Batch appended"
        );
        start..end
    }

    pub fn batch_size(&self) -> usize {
        self.settings.batch_size(self.viewport)
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.loaded_count
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == RenderPhase::Loading
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        self.mode
    }

    pub fn manual_activations(&self) -> usize {
        self.manual_activations
    }

    pub fn shows_manual_control(&self) -> bool {
        self.control_visible
    }

    pub fn scroll_listener_attached(&self) -> bool {
        self.listener.is_attached()
    }

    /// Number of times a scroll listener has been attached since creation.
    pub fn scroll_listener_attachments(&self) -> usize {
        self.listener.attachments()
    }

    /// Deadline of the in-flight batch, if any.
    pub fn pending_due(&self) -> Option<Instant> {
        self.pending
    }

    pub fn view(&self) -> RenderedView<'_, T> {
        if self.items.is_empty() {
            RenderedView::Placeholder
        } else {
            RenderedView::Items(&self.rendered)
        }
    }

    pub fn rendered(&self) -> &[T] {
        &self.rendered
    }

    pub fn status_label(&self) -> String {
        if self.items.is_empty() {
            "0 products found".to_string()
        } else {
            format!(
                "Showing {} of {} products",
                self.loaded_count,
                self.items.len()
            )
        }
    }

    pub fn load_more_label(&self) -> String {
        format!("Load More ({} remaining)", self.remaining())
    }
}
