//! Bounded, thread-safe FIFO of key transitions.
//!
//! # Why a bounded ring buffer? (for beginners)
//!
//! The gesture loop runs at camera frame rate and must never stall waiting
//! on the operating system.  Key events are therefore handed to a separate
//! worker thread through this queue:
//!
//! - **Producers** (any thread) call [`EventQueue::push`].  It never blocks:
//!   if the buffer is full the event is rejected and `false` is returned.
//!   This is *backpressure*: new input is dropped instead of slowing the
//!   producer down or overwriting events that are already queued.
//! - **The consumer** (the single worker thread) calls [`EventQueue::pop`],
//!   which sleeps on a condition variable until an event arrives.
//!
//! The buffer, its head/tail indices, the element count, and the closed flag
//! all live behind one `Mutex`, held only for the body of each call.
//!
//! # Shutting down
//!
//! [`EventQueue::close`] wakes every waiter and makes further pushes fail.
//! Events already in the buffer stay poppable; `pop` returns `None` only once
//! the queue is both closed and empty.  This lets the worker drain pending
//! key-ups before it exits.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use gesture_core::KeyEvent;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 128;

/// Ring state guarded by the queue mutex.
struct Ring {
    slots: Box<[Option<KeyEvent>]>,
    head: usize,
    tail: usize,
    count: usize,
    closed: bool,
}

impl Ring {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
            closed: false,
        }
    }

    fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    fn push_tail(&mut self, event: KeyEvent) {
        debug_assert!(!self.is_full());
        self.slots[self.tail] = Some(event);
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
    }

    fn take_head(&mut self) -> Option<KeyEvent> {
        if self.count == 0 {
            return None;
        }
        let event = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        event
    }
}

/// Fixed-capacity circular buffer of [`KeyEvent`]s.
pub struct EventQueue {
    ring: Mutex<Ring>,
    available: Condvar,
    capacity: usize,
}

impl EventQueue {
    /// Creates a queue with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a queue holding at most `capacity` events.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ring: Mutex::new(Ring::with_capacity(capacity)),
            available: Condvar::new(),
            capacity,
        }
    }

    /// Appends `event` at the tail without blocking.
    ///
    /// Returns `false`, leaving the buffer untouched, when the queue is full
    /// or closed.
    pub fn push(&self, event: KeyEvent) -> bool {
        {
            let mut ring = self.lock();
            if ring.closed || ring.is_full() {
                return false;
            }
            ring.push_tail(event);
        }
        self.available.notify_one();
        true
    }

    /// Removes the head event, sleeping until one is available.
    ///
    /// Returns `None` only after [`close`](Self::close) once every queued
    /// event has been taken.
    pub fn pop(&self) -> Option<KeyEvent> {
        let mut ring = self.lock();
        loop {
            if let Some(event) = ring.take_head() {
                return Some(event);
            }
            if ring.closed {
                return None;
            }
            ring = self
                .available
                .wait(ring)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Removes the head event if there is one, without waiting.
    pub fn try_pop(&self) -> Option<KeyEvent> {
        self.lock().take_head()
    }

    /// Rejects further pushes and wakes all blocked consumers.
    pub fn close(&self) {
        self.lock().closed = true;
        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of events pushed but not yet popped.
    pub fn len(&self) -> usize {
        self.lock().count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Ring mutations never panic midway, so a poisoned ring is still consistent.
    fn lock(&self) -> MutexGuard<'_, Ring> {
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
