//! Backend that accepts and discards every event.

use gesture_core::{KeyEvent, Platform};
use tracing::trace;

use super::{DispatchError, KeyDispatcher};

/// Used on unsupported hosts, on machines without an input session, and
/// for dry runs (`backend = "noop"`).
pub struct NoopDispatcher {
    platform: Platform,
}

impl NoopDispatcher {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Uses the host key-code table, or Linux's on an unknown host.
    pub fn for_host() -> Self {
        Self::new(Platform::host().unwrap_or(Platform::Linux))
    }
}

impl KeyDispatcher for NoopDispatcher {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn name(&self) -> &'static str {
        "noop"
    }

    fn dispatch(&self, event: KeyEvent) -> Result<(), DispatchError> {
        trace!(keycode = event.keycode, direction = ?event.direction, "discarding key event");
        Ok(())
    }
}
