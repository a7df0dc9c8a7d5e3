use std::time::Duration;

use crate::config::RenderConfig;

/// Viewport width class, which determines the batch size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Wide,
    Narrow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RendererSettings {
    pub wide_batch_size: usize,
    pub narrow_batch_size: usize,
    pub narrow_breakpoint: f32,
    pub click_threshold: usize,
    /// Loading window before a batch lands. Zero appends immediately.
    pub delay: Duration,
    pub scroll_proximity: f32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for RendererSettings {
    fn from(config: &RenderConfig) -> Self {
        Self {
            // A zero batch would never make progress.
            wide_batch_size: config.wide_batch_size.max(1),
            narrow_batch_size: config.narrow_batch_size.max(1),
            narrow_breakpoint: config.narrow_breakpoint,
            click_threshold: config.click_threshold,
            delay: config.batch_delay(),
            scroll_proximity: config.scroll_proximity,
        }
    }
}

impl RendererSettings {
    pub fn classify(&self, width: f32) -> ViewportClass {
        if width < self.narrow_breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn batch_size(&self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Wide => self.wide_batch_size,
            ViewportClass::Narrow => self.narrow_batch_size,
        }
    }
}
