use std::time::{Duration, Instant};

/// The main product image, which fades out before swapping to a newly
/// selected index.
///
/// Requests overwrite each other: however many navigations arrive during the
/// fade, the swap lands on the most recent index only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageTransition {
    delay: Duration,
    displayed: usize,
    target: usize,
    due: Option<Instant>,
}

impl StageTransition {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            displayed: 0,
            target: 0,
            due: None,
        }
    }

    /// Ask for `index` to be shown. Restarts the fade window.
    pub fn request(&mut self, index: usize, now: Instant) {
        self.target = index;
        if self.delay.is_zero() {
            self.displayed = index;
            self.due = None;
        } else {
            self.due = Some(now + self.delay);
        }
    }

    /// Complete the swap once the fade window has passed. Returns the newly
    /// displayed index.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                self.displayed = self.target;
                Some(self.displayed)
            }
            _ => None,
        }
    }

    /// Jump straight to `index` with no fade, e.g. for a new image set.
    pub fn show_immediately(&mut self, index: usize) {
        self.target = index;
        self.displayed = index;
        self.due = None;
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn is_fading(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }
}
