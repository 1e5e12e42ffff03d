//! Graceful shutdown: tear down tabs, then the chrome, then the window.

use super::core::TabhostApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl TabhostApp {
    /// Perform graceful shutdown. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Close every tab (stop media, blank, mute, detach)
    /// 2. Destroy the chrome view
    /// 3. Release the window
    pub(super) fn shutdown(&mut self) {
        if self.should_exit && self.window.is_none() {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        if let Some(tabs) = &mut self.tabs {
            tabs.close_all();
        }
        self.tabs = None;
        self.chrome = None;
        self.window_alive = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
