//! Mock key emitter for unit and integration testing.
//!
//! # Why a mock emitter?
//!
//! The real emitters (`SendInputEmitter`, `XTestEmitter`,
//! `CoreGraphicsEmitter`) press real keys on the machine running the tests
//! and need a desktop session.  `MockKeyEmitter` records every event in
//! order instead, so tests can assert exactly what reached the "OS".
//!
//! # Usage in tests
//!
//! ```ignore
//! let emitter = Arc::new(MockKeyEmitter::new(Platform::MacOs));
//! let handler = KeyHandler::new(
//!     Arc::new(NativeInputDispatcher::new(emitter.clone())),
//!     16,
//! )?;
//!
//! handler.key_down("s");
//! assert!(emitter.wait_for(1, Duration::from_secs(1)));
//! assert_eq!(emitter.events(), vec![KeyEvent::pressed(49)]);
//! ```
//!
//! Call `set_failing(true)` to make every emit return
//! `DispatchError::Platform`, and use [`MockKeyEmitter::with_delay`] to
//! simulate a slow OS call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use gesture_core::{KeyEvent, Platform};

use super::KeyEmitter;
use crate::infrastructure::dispatch::DispatchError;

#[derive(Default)]
struct Record {
    events: Vec<KeyEvent>,
    attempts: usize,
}

/// Records emitted events instead of injecting them.
pub struct MockKeyEmitter {
    platform: Platform,
    delay: Duration,
    should_fail: AtomicBool,
    record: Mutex<Record>,
    changed: Condvar,
}

impl MockKeyEmitter {
    pub fn new(platform: Platform) -> Self {
        Self::with_delay(platform, Duration::ZERO)
    }

    /// Every emit sleeps for `delay` before recording.
    pub fn with_delay(platform: Platform, delay: Duration) -> Self {
        Self {
            platform,
            delay,
            should_fail: AtomicBool::new(false),
            record: Mutex::new(Record::default()),
            changed: Condvar::new(),
        }
    }

    /// When `true`, emits fail with `DispatchError::Platform` and record nothing.
    pub fn set_failing(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Successfully emitted events, in order.
    pub fn events(&self) -> Vec<KeyEvent> {
        self.lock().events.clone()
    }

    /// Waits until at least `count` events were recorded.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> bool {
        self.wait_until(timeout, |r| r.events.len() >= count)
    }

    /// Waits until at least `count` emits were attempted, failed or not.
    pub fn wait_for_attempts(&self, count: usize, timeout: Duration) -> bool {
        self.wait_until(timeout, |r| r.attempts >= count)
    }

    fn wait_until(&self, timeout: Duration, done: impl Fn(&Record) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        let mut record = self.lock();
        while !done(&record) {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            record = self
                .changed
                .wait_timeout(record, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, Record> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyEmitter for MockKeyEmitter {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn emit(&self, event: KeyEvent) -> Result<(), DispatchError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let result = {
            let mut record = self.lock();
            record.attempts += 1;
            if self.should_fail.load(Ordering::SeqCst) {
                Err(DispatchError::Platform("mock failure".into()))
            } else {
                record.events.push(event);
                Ok(())
            }
        };
        self.changed.notify_all();
        result
    }
}
