//! Synchronous native-input backend.
//!
//! The worker thread calls straight into the OS injection API (SendInput on
//! Windows, XTest on Linux) and only returns to the queue once the call is
//! done.  Injection on these platforms takes microseconds, so blocking the
//! worker is fine; the producers never see it.

use std::sync::Arc;

use gesture_core::{KeyEvent, Platform};

use super::{DispatchError, KeyDispatcher};
use crate::infrastructure::input_emulation::KeyEmitter;

pub struct NativeInputDispatcher {
    emitter: Arc<dyn KeyEmitter>,
}

impl NativeInputDispatcher {
    pub fn new(emitter: Arc<dyn KeyEmitter>) -> Self {
        Self { emitter }
    }
}

impl KeyDispatcher for NativeInputDispatcher {
    fn platform(&self) -> Platform {
        self.emitter.platform()
    }

    fn name(&self) -> &'static str {
        "native-input"
    }

    fn dispatch(&self, event: KeyEvent) -> Result<(), DispatchError> {
        self.emitter.emit(event)
    }
}
