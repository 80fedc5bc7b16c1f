//! gesture-keys library entry point.
//!
//! # What does gesture-keys do? (for beginners)
//!
//! A hand tracker watches a webcam and reports where the joints of each
//! hand are.  gesture-keys turns those hand poses into synthetic key presses
//! so the player can steer a game (or anything else driven by arrow keys and
//! space) with their hands:
//!
//! 1. The gesture policy looks at a frame of hands and decides which keys
//!    to tap or hold (`application::gesture_policy`).
//! 2. Each key transition is mapped to the host's native key code and put on
//!    a bounded queue without blocking the caller
//!    (`application::key_handler`).
//! 3. A dedicated worker thread drains the queue and injects the keys into
//!    the OS (`SendInput` on Windows, XTest on Linux, CoreGraphics on macOS).
//!
//! # Process-wide facade
//!
//! Most callers create a [`KeyHandler`] themselves.  For the simple
//! "just press a key" case there is also a lazily-created global handler:
//!
//! ```no_run
//! gesture_keys::key_down("space");
//! gesture_keys::key_up("space");
//! ```
//!
//! [`initialize`] is called implicitly by [`key_down`] / [`key_up`] and only
//! builds the handler once.  The global handler lives until process exit.

use std::sync::OnceLock;

use tracing::error;

/// Application layer: the key handler and the gesture policy.
pub mod application;

/// Infrastructure layer: queue, worker, dispatch backends, OS adapters.
pub mod infrastructure;

pub use application::gesture_policy::{
    GestureAction, GesturePolicy, GestureSettings, HandFrame, TrackedHand,
};
pub use application::key_handler::{HandlerError, KeyHandler};
pub use infrastructure::dispatch::{BackendKind, DispatchError, KeyDispatcher};

static GLOBAL: OnceLock<Option<KeyHandler>> = OnceLock::new();

/// Starts the global handler if it is not running yet.
///
/// Returns `false` if the handler could not be created; the failure is
/// logged once and later facade calls are no-ops.
pub fn initialize() -> bool {
    global().is_some()
}

/// The global handler, created on first use with the automatic backend and
/// the default queue capacity.
pub fn global() -> Option<&'static KeyHandler> {
    GLOBAL
        .get_or_init(|| {
            let config = infrastructure::config::KeysConfig::default();
            match KeyHandler::from_config(&config) {
                Ok(handler) => Some(handler),
                Err(e) => {
                    error!("global key handler unavailable: {e}");
                    None
                }
            }
        })
        .as_ref()
}

/// Queues a key press on the global handler.  See [`KeyHandler::key_down`].
pub fn key_down<'a>(symbol: impl Into<Option<&'a str>>) -> bool {
    global().is_some_and(|handler| handler.key_down(symbol))
}

/// Queues a key release on the global handler.  See [`KeyHandler::key_up`].
pub fn key_up<'a>(symbol: impl Into<Option<&'a str>>) -> bool {
    global().is_some_and(|handler| handler.key_up(symbol))
}
