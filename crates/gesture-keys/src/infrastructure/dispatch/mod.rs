//! Key dispatch backends.
//!
//! A [`KeyDispatcher`] takes one [`KeyEvent`] from the worker thread and gets
//! it to the operating system.  Which backend is used is decided **once, at
//! startup, at runtime** via [`select_dispatcher`]:
//!
//! | Backend | Type | Delivery |
//! |---------|------|----------|
//! | native input  | [`NativeInputDispatcher`]  | Synchronous: the worker thread itself calls the OS injection API. |
//! | posting queue | [`PostingQueueDispatcher`] | Asynchronous: the event is handed by value to a strictly-ordered poster thread running at user-interactive priority. |
//! | no-op         | [`NoopDispatcher`]         | Discards every event (headless machines, dry runs). |
//!
//! [`BackendKind::Auto`] picks native input on Windows (SendInput) and Linux
//! (XTest), and the posting queue on macOS (CoreGraphics).
//!
//! Tests swap in a `NativeInputDispatcher` over
//! [`MockKeyEmitter`](crate::infrastructure::input_emulation::mock::MockKeyEmitter)
//! or a mockall `MockKeyDispatcher`.

pub mod native;
pub mod noop;
pub mod posting_queue;

use std::sync::Arc;

use gesture_core::{KeyEvent, Platform};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::infrastructure::input_emulation::host_emitter;

pub use native::NativeInputDispatcher;
pub use noop::NoopDispatcher;
pub use posting_queue::PostingQueueDispatcher;

/// Error type for key dispatch and backend set-up.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The OS rejected or failed to inject the event.
    #[error("platform error: {0}")]
    Platform(String),
    /// The backend could not be opened (no display, missing permission, …).
    #[error("input backend unavailable: {0}")]
    Unavailable(String),
    /// The posting queue has stopped and accepts no more events.
    #[error("posting queue is closed")]
    Closed,
}

/// Delivers key events to the host OS.
///
/// Implementations are called only from the dispatch worker thread.
#[cfg_attr(test, mockall::automock)]
pub trait KeyDispatcher: Send + Sync {
    /// The platform whose key-code table this backend expects.
    fn platform(&self) -> Platform;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Injects (or schedules injection of) one key transition.
    fn dispatch(&self, event: KeyEvent) -> Result<(), DispatchError>;
}

/// Which backend [`select_dispatcher`] should build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Best backend for the host; falls back to no-op if it cannot open.
    #[default]
    Auto,
    Native,
    PostingQueue,
    Noop,
}

/// Builds the dispatcher for `kind` on this host.
///
/// # Errors
///
/// Returns [`DispatchError::Unavailable`] when an explicitly requested
/// backend cannot be opened.  `Auto` never fails; it degrades to
/// [`NoopDispatcher`] with a warning.
pub fn select_dispatcher(kind: BackendKind) -> Result<Arc<dyn KeyDispatcher>, DispatchError> {
    let dispatcher: Arc<dyn KeyDispatcher> = match kind {
        BackendKind::Noop => Arc::new(NoopDispatcher::for_host()),
        BackendKind::Native => Arc::new(NativeInputDispatcher::new(host_emitter()?)),
        BackendKind::PostingQueue => Arc::new(PostingQueueDispatcher::spawn(host_emitter()?)?),
        BackendKind::Auto => {
            let preferred = match Platform::host() {
                Some(Platform::MacOs) => BackendKind::PostingQueue,
                Some(_) => BackendKind::Native,
                None => BackendKind::Noop,
            };
            match select_dispatcher(preferred) {
                Ok(dispatcher) => return Ok(dispatcher),
                Err(e) => {
                    warn!("{preferred:?} key backend unavailable ({e}); key events will be discarded");
                    Arc::new(NoopDispatcher::for_host())
                }
            }
        }
    };
    info!(backend = dispatcher.name(), platform = %dispatcher.platform(), "key dispatcher selected");
    Ok(dispatcher)
}
