use tracing::{info, warn};

/// Tracks the background asset-caching worker.
///
/// Registration failures are logged and swallowed: the worker is an optional
/// enhancement. When a new worker version takes control, the page is
/// reloaded exactly once for the whole session.
pub struct UpdateChannel {
    reloaded: bool,
}

impl UpdateChannel {
    pub fn new() -> UpdateChannel {
        UpdateChannel { reloaded: false }
    }

    pub fn on_registration_succeeded(&self, scope: &str) {
        info!("Background worker registered with scope {scope}");
    }

    pub fn on_registration_failed(&self, message: &str) {
        warn!("Background worker registration failed: {message}");
    }

    /// A new worker took control. Returns whether the page should reload.
    pub fn on_controller_changed(&mut self) -> bool {
        if self.reloaded {
            return false;
        }
        self.reloaded = true;
        true
    }
}

impl Default for UpdateChannel {
    fn default() -> Self {
        Self::new()
    }
}
