//! The single consumer thread between the event queue and the dispatcher.
//!
//! ```text
//!            ┌──────────── Idle (blocked in pop) ◄───────────┐
//!  pop → Some│                                               │dispatch returned
//!            └──────────────► Dispatching ───────────────────┘
//!  pop → None (closed and drained) ⇒ thread exits with a WorkerReport
//! ```
//!
//! Dispatch errors are logged and counted; they never stop the loop.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::dispatch::KeyDispatcher;
use super::event_queue::EventQueue;
use super::thread_priority;

pub const WORKER_THREAD_NAME: &str = "gesture-key-worker";

/// What the worker did over its lifetime, returned when it is joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub dispatched: u64,
    pub failed: u64,
}

/// Starts the worker thread.  It runs until `queue` is closed and empty.
pub fn spawn_worker(
    queue: Arc<EventQueue>,
    dispatcher: Arc<dyn KeyDispatcher>,
) -> io::Result<JoinHandle<WorkerReport>> {
    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || run(&queue, dispatcher.as_ref()))
}

fn run(queue: &EventQueue, dispatcher: &dyn KeyDispatcher) -> WorkerReport {
    if !thread_priority::raise_current_thread() {
        debug!("elevated thread priority unsupported here; worker runs at default priority");
    }
    info!(backend = dispatcher.name(), "key worker started");

    let mut report = WorkerReport::default();
    while let Some(event) = queue.pop() {
        match dispatcher.dispatch(event) {
            Ok(()) => {
                report.dispatched += 1;
                debug!(keycode = event.keycode, direction = ?event.direction, "key event dispatched");
            }
            Err(e) => {
                report.failed += 1;
                warn!(keycode = event.keycode, "key dispatch failed: {e}");
            }
        }
    }

    info!(
        dispatched = report.dispatched,
        failed = report.failed,
        "key worker stopped"
    );
    report
}
