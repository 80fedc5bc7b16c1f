//! `KeyHandler`: the producer-facing entry point.
//!
//! # Data flow (for beginners)
//!
//! ```text
//!  any thread                        worker thread
//!  ──────────                        ─────────────
//!  key_down("space")
//!    → KeySymbol::Space
//!    → native key code (dispatcher's platform table)
//!    → EventQueue::push ──────────►  EventQueue::pop
//!      (never blocks; false if full)   → KeyDispatcher::dispatch → OS
//! ```
//!
//! Producers only ever take the queue lock for a moment, so calling
//! `key_down` from a frame-rate loop never waits on the OS.  Everything
//! that can go wrong on the way in (unknown symbol, full queue, handler
//! already shut down) is reported as a plain `false`.
//!
//! The one exception is the release half of a press: once a key-down has
//! been queued, [`KeyHandler::release`] waits for room rather than drop the
//! matching key-up, so a burst from another producer cannot leave the key
//! held down.
//!
//! # Shutdown
//!
//! [`KeyHandler::shutdown`] closes the queue so no new events are accepted,
//! lets the worker dispatch everything already queued (a pending key-up is
//! never lost, so no key stays held down), and joins the thread.  It runs
//! automatically on drop.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gesture_core::{KeyDirection, KeyEvent, KeyMapper, KeySymbol, Platform};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::infrastructure::config::KeysConfig;
use crate::infrastructure::dispatch::{select_dispatcher, DispatchError, KeyDispatcher};
use crate::infrastructure::event_queue::EventQueue;
use crate::infrastructure::worker::{spawn_worker, WorkerReport};

/// Error type for building a [`KeyHandler`].
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The worker thread could not be created.
    #[error("failed to start key worker thread: {0}")]
    Spawn(#[from] io::Error),

    /// The configured dispatch backend could not be opened.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// How long [`KeyHandler::release`] waits between attempts on a full queue.
pub const RELEASE_RETRY_INTERVAL: Duration = Duration::from_millis(1);

/// Outcome of one non-blocking submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Queued,
    Full,
    Closed,
}

pub struct KeyHandler {
    queue: Arc<EventQueue>,
    dispatcher: Arc<dyn KeyDispatcher>,
    worker: Mutex<Option<JoinHandle<WorkerReport>>>,
}

impl KeyHandler {
    /// Creates the queue and starts the worker around `dispatcher`.
    ///
    /// A `capacity` of 0 is raised to 1.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Spawn`] if the worker thread cannot start.
    pub fn new(dispatcher: Arc<dyn KeyDispatcher>, capacity: usize) -> Result<Self, HandlerError> {
        let queue = Arc::new(EventQueue::with_capacity(capacity));
        let worker = spawn_worker(Arc::clone(&queue), Arc::clone(&dispatcher))?;
        Ok(Self {
            queue,
            dispatcher,
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Selects the backend and queue size from `config`.
    ///
    /// # Errors
    ///
    /// [`HandlerError::Dispatch`] when an explicitly configured backend is
    /// unavailable, [`HandlerError::Spawn`] as for [`KeyHandler::new`].
    pub fn from_config(config: &KeysConfig) -> Result<Self, HandlerError> {
        let dispatcher = select_dispatcher(config.dispatch.backend)?;
        Self::new(dispatcher, config.queue.capacity)
    }

    /// Queues a key press.  `symbol` may be a `&str` or `Option<&str>`.
    pub fn key_down<'a>(&self, symbol: impl Into<Option<&'a str>>) -> bool {
        self.submit_str(symbol.into(), KeyDirection::Pressed)
    }

    /// Queues a key release.  `symbol` may be a `&str` or `Option<&str>`.
    pub fn key_up<'a>(&self, symbol: impl Into<Option<&'a str>>) -> bool {
        self.submit_str(symbol.into(), KeyDirection::Released)
    }

    fn submit_str(&self, symbol: Option<&str>, direction: KeyDirection) -> bool {
        match symbol.and_then(KeySymbol::parse) {
            Some(symbol) => self.submit(symbol, direction),
            None => {
                trace!(?symbol, "ignoring unrecognised key symbol");
                false
            }
        }
    }

    /// Queues one transition of an already-parsed symbol.
    pub fn submit(&self, symbol: KeySymbol, direction: KeyDirection) -> bool {
        let outcome = self.try_submit(symbol, direction);
        if outcome != Submission::Queued {
            debug!(%symbol, ?outcome, "key event dropped");
        }
        outcome == Submission::Queued
    }

    /// Like [`submit`](Self::submit), but says why an event was not queued.
    pub fn try_submit(&self, symbol: KeySymbol, direction: KeyDirection) -> Submission {
        let keycode = KeyMapper::key_code(self.dispatcher.platform(), symbol);
        if self.queue.push(KeyEvent { direction, keycode }) {
            Submission::Queued
        } else if self.queue.is_closed() {
            Submission::Closed
        } else {
            Submission::Full
        }
    }

    /// Queues the key-up for a key whose key-down was queued, blocking the
    /// calling thread while the queue is full.
    ///
    /// Returns `false` only if the handler shut down first; in that case the
    /// drain on shutdown has already delivered the key-down.
    pub fn release(&self, symbol: KeySymbol) -> bool {
        loop {
            match self.try_submit(symbol, KeyDirection::Released) {
                Submission::Queued => return true,
                Submission::Closed => return false,
                Submission::Full => thread::sleep(RELEASE_RETRY_INTERVAL),
            }
        }
    }

    /// Presses `symbol`, blocks the calling thread for `hold`, releases it.
    ///
    /// Returns `false` if the symbol is invalid or the key-down was dropped;
    /// nothing is held down in that case.
    pub fn press(&self, symbol: &str, hold: Duration) -> bool {
        let Some(symbol) = KeySymbol::parse(symbol) else {
            trace!(symbol, "ignoring unrecognised key symbol");
            return false;
        };
        if !self.submit(symbol, KeyDirection::Pressed) {
            return false;
        }
        thread::sleep(hold);
        self.release(symbol)
    }

    /// Events waiting for the worker.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn platform(&self) -> Platform {
        self.dispatcher.platform()
    }

    pub fn dispatcher_name(&self) -> &'static str {
        self.dispatcher.name()
    }

    /// Stops accepting events, drains the queue, and joins the worker.
    ///
    /// Returns the worker's report on the first call and `None` afterwards
    /// (or if the worker panicked).
    pub fn shutdown(&self) -> Option<WorkerReport> {
        self.queue.close();
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;
        match handle.join() {
            Ok(report) => Some(report),
            Err(_) => {
                warn!("key worker panicked before shutdown");
                None
            }
        }
    }
}

impl Drop for KeyHandler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
