use std::path::PathBuf;

/// Log lines kept in the status panel.
const MAX_LOG_LINES: usize = 200;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Catalog file currently shown, once one has loaded.
    pub catalog_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Shown briefly after a checkout link was handed off.
    pub last_handoff: Option<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_LINES {
            let excess = self.log_messages.len() - MAX_LOG_LINES;
            self.log_messages.drain(..excess);
        }
    }
}
