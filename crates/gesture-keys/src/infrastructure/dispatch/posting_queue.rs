//! Asynchronous posting-queue backend.
//!
//! # How it works (for beginners)
//!
//! Some OS posting calls (notably `CGEventPost` on macOS) can take long
//! enough that doing them inline would delay the next queued event.  This
//! backend therefore owns a second thread, the *poster*, fed through an
//! unbounded channel:
//!
//! ```text
//! worker thread ── dispatch(event) ──► channel ──► poster thread ── emit ──► OS
//!                  (returns at once)              (one at a time, FIFO)
//! ```
//!
//! - The channel is strictly ordered and has exactly one receiver, so events
//!   are posted in the order the worker dispatched them.
//! - [`KeyEvent`] is `Copy`; it travels through the channel by value with no
//!   per-event allocation.
//! - The poster asks the OS for user-interactive priority on start-up.
//!
//! Dropping the dispatcher closes the channel; the poster finishes whatever
//! is still queued and is then joined.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use gesture_core::{KeyEvent, Platform};
use tracing::{debug, warn};

use super::{DispatchError, KeyDispatcher};
use crate::infrastructure::input_emulation::KeyEmitter;
use crate::infrastructure::thread_priority;

pub const POSTER_THREAD_NAME: &str = "gesture-key-poster";

pub struct PostingQueueDispatcher {
    platform: Platform,
    tx: Option<Sender<KeyEvent>>,
    poster: Option<JoinHandle<()>>,
}

impl PostingQueueDispatcher {
    /// Starts the poster thread around `emitter`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Unavailable`] if the thread cannot be spawned.
    pub fn spawn(emitter: Arc<dyn KeyEmitter>) -> Result<Self, DispatchError> {
        let platform = emitter.platform();
        let (tx, rx) = unbounded();
        let poster = thread::Builder::new()
            .name(POSTER_THREAD_NAME.to_string())
            .spawn(move || run_poster(emitter, rx))
            .map_err(|e| DispatchError::Unavailable(format!("cannot start poster thread: {e}")))?;

        Ok(Self {
            platform,
            tx: Some(tx),
            poster: Some(poster),
        })
    }
}

fn run_poster(emitter: Arc<dyn KeyEmitter>, rx: Receiver<KeyEvent>) {
    if !thread_priority::raise_current_thread() {
        debug!("poster thread running at default priority");
    }
    for event in rx.iter() {
        if let Err(e) = emitter.emit(event) {
            warn!(keycode = event.keycode, "posting key event failed: {e}");
        }
    }
    debug!("poster thread exiting");
}

impl KeyDispatcher for PostingQueueDispatcher {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn name(&self) -> &'static str {
        "posting-queue"
    }

    fn dispatch(&self, event: KeyEvent) -> Result<(), DispatchError> {
        let tx = self.tx.as_ref().ok_or(DispatchError::Closed)?;
        tx.send(event).map_err(|_| DispatchError::Closed)
    }
}

impl Drop for PostingQueueDispatcher {
    fn drop(&mut self) {
        // Closing the channel ends the poster's receive loop after it drains.
        drop(self.tx.take());
        if let Some(poster) = self.poster.take() {
            if poster.join().is_err() {
                warn!("poster thread panicked");
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
