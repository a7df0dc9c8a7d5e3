/// Navigation direction a swipe maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left.
    Next,
    /// Finger moved left to right.
    Prev,
}

/// Classifies one horizontal drag as a swipe or a tap.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// End the drag at `x`. Movement up to the threshold is a tap and yields
    /// nothing. A finish without a matching begin is ignored.
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(x - start, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Direction of a horizontal displacement `dx`, if it exceeds `threshold`.
pub(crate) fn classify(dx: f32, threshold: f32) -> Option<SwipeDirection> {
    if dx.abs() <= threshold {
        None
    } else if dx < 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Prev)
    }
}
