use tracing::trace;

/// Attachment state of the page-level scroll listener.
///
/// Attach and detach are idempotent: repeated calls in the same state do
/// nothing, so filter resets can never stack up listeners.
#[derive(Debug, Default)]
pub(super) struct ScrollListener {
    attached: bool,
    attachments: usize,
}

impl ScrollListener {
    pub(super) fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        self.attachments += 1;
        trace!(attachments = self.attachments, "Scroll listener attached");
        true
    }

    pub(super) fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        trace!("Scroll listener detached");
        true
    }

    pub(super) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(super) fn attachments(&self) -> usize {
        self.attachments
    }
}
