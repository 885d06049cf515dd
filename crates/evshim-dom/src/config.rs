//! Host Configuration

/// Host configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Put the window at the head of every node's propagation path
    pub window_in_path: bool,

    /// Ignore a registration whose (handler, capture) pair is already
    /// present for the same target and event
    pub dedupe_listeners: bool,
}

impl HostConfig {
    pub fn with_window_in_path(mut self, enabled: bool) -> Self {
        self.window_in_path = enabled;
        self
    }

    pub fn with_dedupe_listeners(mut self, enabled: bool) -> Self {
        self.dedupe_listeners = enabled;
        self
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            window_in_path: true,
            dedupe_listeners: true,
        }
    }
}
