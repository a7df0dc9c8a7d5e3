use std::time::{Duration, Instant};

use crate::config::ViewerConfig;
use crate::consts::{MIN_PINCH_DISTANCE, SWIPE_THRESHOLD, WHEEL_NOTCH_POINTS};
use crate::gallery::{swipe_direction, SwipeDirection};

/// Screen-space position or displacement in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Offset {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Offset {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    pub wheel_step: f32,
    pub double_tap_zoom: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

impl From<&ViewerConfig> for ZoomLimits {
    fn from(config: &ViewerConfig) -> Self {
        let min = config.min_zoom.max(f32::MIN_POSITIVE);
        Self {
            min,
            max: config.max_zoom.max(min),
            wheel_step: config.wheel_step.abs(),
            double_tap_zoom: config.double_tap_zoom,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.min;
        }
        zoom.clamp(self.min, self.max)
    }
}

/// Zoom that a pinch at `current_distance` produces, relative to the
/// distance and zoom captured when the pinch began.
pub fn pinched_zoom(
    current_distance: f32,
    baseline_distance: f32,
    baseline_zoom: f32,
    limits: &ZoomLimits,
) -> f32 {
    if baseline_distance < MIN_PINCH_DISTANCE {
        return limits.clamp(baseline_zoom);
    }
    limits.clamp(baseline_zoom * current_distance / baseline_distance)
}

/// How a drag that just started will be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    /// Zoomed in: the drag pans the image.
    Pan,
    /// At the minimum zoom: the drag may turn into a gallery swipe.
    SwipeCandidate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragRelease {
    Panned,
    Swipe(SwipeDirection),
    /// A swipe candidate that stayed below the swipe threshold, or a release
    /// with no drag in progress.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    Single,
    /// Second tap inside the double-tap window; the zoom was toggled.
    DoubleTap { zoom: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    mode: DragMode,
    origin: Offset,
    start_translate: Offset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchBaseline {
    distance: f32,
    zoom: f32,
}

/// Gesture state of the fullscreen viewer.
///
/// Whenever the zoom resolves to the minimum the translate is forced back to
/// the origin, so the image can only be panned while zoomed in.
///
/// Double taps are recognised by elapsed time alone. Two taps far apart on
/// screen still toggle the zoom when they land inside the window.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomPanController {
    limits: ZoomLimits,
    double_tap_window: Duration,
    swipe_threshold: f32,
    zoom: f32,
    translate: Offset,
    drag: Option<Drag>,
    pinch: Option<PinchBaseline>,
    last_tap: Option<Instant>,
    scroll_residue: f32,
}

impl Default for ZoomPanController {
    fn default() -> Self {
        Self::new(&ViewerConfig::default(), SWIPE_THRESHOLD)
    }
}

impl ZoomPanController {
    pub fn new(config: &ViewerConfig, swipe_threshold: f32) -> Self {
        let limits = ZoomLimits::from(config);
        Self {
            zoom: limits.min,
            limits,
            double_tap_window: config.double_tap_window(),
            swipe_threshold,
            translate: Offset::ZERO,
            drag: None,
            pinch: None,
            last_tap: None,
            scroll_residue: 0.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn translate(&self) -> Offset {
        self.translate
    }

    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom > self.limits.min
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = self.limits.clamp(zoom);
        if !self.is_zoomed() {
            self.zoom = self.limits.min;
            self.translate = Offset::ZERO;
        }
    }

    /// One wheel notch. Positive `delta` zooms in, negative zooms out, zero
    /// does nothing. Only the sign matters.
    pub fn wheel_zoom(&mut self, delta: f32) -> f32 {
        if delta > 0.0 {
            self.set_zoom(self.zoom + self.limits.wheel_step);
        } else if delta < 0.0 {
            self.set_zoom(self.zoom - self.limits.wheel_step);
        }
        self.zoom
    }

    /// Continuous scrolling of `points` logical px. Every whole notch of
    /// accumulated scroll is one wheel step; the remainder carries over.
    pub fn scroll_zoom(&mut self, points: f32) -> f32 {
        if !points.is_finite() {
            return self.zoom;
        }
        self.scroll_residue += points;
        let notches = (self.scroll_residue / WHEEL_NOTCH_POINTS).trunc();
        self.scroll_residue -= notches * WHEEL_NOTCH_POINTS;
        for _ in 0..notches.abs() as u32 {
            self.wheel_zoom(notches);
        }
        self.zoom
    }

    /// Two pointers are down `distance` apart. Any drag in progress ends.
    pub fn pinch_start(&mut self, distance: f32) {
        self.drag = None;
        self.pinch = Some(PinchBaseline {
            distance,
            zoom: self.zoom,
        });
    }

    /// Pointers moved to `distance` apart. Ignored without a pinch baseline.
    pub fn pinch_update(&mut self, distance: f32) -> f32 {
        if let Some(baseline) = self.pinch {
            self.set_zoom(pinched_zoom(
                distance,
                baseline.distance,
                baseline.zoom,
                &self.limits,
            ));
        }
        self.zoom
    }

    pub fn pinch_end(&mut self) {
        self.pinch = None;
    }

    /// A single pointer went down at `pos`. Returns `None` while pinching.
    pub fn drag_start(&mut self, pos: Offset) -> Option<DragMode> {
        if self.pinch.is_some() {
            return None;
        }
        let mode = if self.is_zoomed() {
            DragMode::Pan
        } else {
            DragMode::SwipeCandidate
        };
        self.drag = Some(Drag {
            mode,
            origin: pos,
            start_translate: self.translate,
        });
        Some(mode)
    }

    /// The pointer moved to `pos`. Pans when the drag started zoomed in and
    /// the image is still zoomed; swipe candidates leave the image in place.
    pub fn drag_move(&mut self, pos: Offset) -> Offset {
        if let Some(drag) = self.drag {
            self.pan_to(drag, pos);
        }
        self.translate
    }

    fn pan_to(&mut self, drag: Drag, pos: Offset) {
        if drag.mode == DragMode::Pan && self.is_zoomed() {
            self.translate = drag.start_translate + (pos - drag.origin);
        }
    }

    /// The pointer was released at `pos`.
    pub fn drag_end(&mut self, pos: Offset) -> DragRelease {
        let Some(drag) = self.drag.take() else {
            return DragRelease::Ignored;
        };
        match drag.mode {
            DragMode::Pan => {
                self.pan_to(drag, pos);
                DragRelease::Panned
            }
            DragMode::SwipeCandidate => {
                match swipe_direction(pos.x - drag.origin.x, self.swipe_threshold) {
                    Some(direction) => DragRelease::Swipe(direction),
                    None => DragRelease::Ignored,
                }
            }
        }
    }

    /// A tap or click landed at time `now`.
    pub fn tap(&mut self, now: Instant) -> TapOutcome {
        let is_double = self
            .last_tap
            .is_some_and(|last| now.saturating_duration_since(last) < self.double_tap_window);
        if is_double {
            self.last_tap = None;
            TapOutcome::DoubleTap {
                zoom: self.toggle_zoom(),
            }
        } else {
            self.last_tap = Some(now);
            TapOutcome::Single
        }
    }

    /// Toggle between the minimum zoom and the double-tap zoom level.
    pub fn toggle_zoom(&mut self) -> f32 {
        if self.is_zoomed() {
            self.set_zoom(self.limits.min);
        } else {
            self.set_zoom(self.limits.double_tap_zoom);
        }
        self.zoom
    }

    /// Back to the minimum zoom at the origin, with no gesture in progress.
    pub fn reset(&mut self) {
        self.zoom = self.limits.min;
        self.translate = Offset::ZERO;
        self.drag = None;
        self.pinch = None;
        self.scroll_residue = 0.0;
        self.last_tap = None;
    }
}
