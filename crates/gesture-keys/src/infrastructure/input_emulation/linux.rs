//! Linux X11 key injection via the XTest extension.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X11 protocol extension that lets a process synthesize
//! keyboard and mouse events as if the user had physically pressed a key.
//! The focused window cannot tell them apart from real input.
//!
//! `XTestFakeKeyEvent(display, keycode, is_press, delay)` takes a server
//! *keycode*, so the KeySym from the key table is converted first:
//!
//! ```text
//! X11 KeySym → XKeysymToKeycode(display, keysym) → X11 keycode
//! ```
//!
//! After each fake event the request buffer is flushed with `XFlush`, so the
//! key reaches the server immediately instead of on the next round-trip.
//!
//! # Permissions
//!
//! The process must be able to open the display named by `DISPLAY`.  If it
//! cannot, [`XTestEmitter::open`] fails with `DispatchError::Unavailable`.

use std::ptr;
use std::sync::{Mutex, PoisonError};

use gesture_core::{KeyEvent, Platform};
use x11::{xlib, xtest};

use super::KeyEmitter;
use crate::infrastructure::dispatch::DispatchError;

/// Passing `CurrentTime` (0) as the delay means "deliver now".
const CURRENT_TIME: u64 = 0;

/// Owned Xlib display connection.
struct Display(*mut xlib::Display);

// SAFETY: the connection is only ever used while holding the emitter's
// mutex, so Xlib never sees concurrent calls on it.
unsafe impl Send for Display {}

impl Drop for Display {
    fn drop(&mut self) {
        // SAFETY: the pointer came from XOpenDisplay and is closed once.
        unsafe {
            xlib::XCloseDisplay(self.0);
        }
    }
}

/// Linux implementation of [`KeyEmitter`] using XTest.
pub struct XTestEmitter {
    display: Mutex<Display>,
}

impl XTestEmitter {
    /// Connects to the X display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Unavailable` if the display cannot be opened.
    pub fn open() -> Result<Self, DispatchError> {
        // SAFETY: a null name asks Xlib to read DISPLAY from the environment.
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            return Err(DispatchError::Unavailable(
                "cannot open X display (is DISPLAY set?)".to_string(),
            ));
        }
        Ok(Self {
            display: Mutex::new(Display(display)),
        })
    }
}

impl KeyEmitter for XTestEmitter {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn emit(&self, event: KeyEvent) -> Result<(), DispatchError> {
        let display = self.display.lock().unwrap_or_else(PoisonError::into_inner);
        let keysym = xlib::KeySym::from(event.keycode);

        // SAFETY: display.0 is a live connection guarded by the mutex.
        let keycode = unsafe { xlib::XKeysymToKeycode(display.0, keysym) };
        if keycode == 0 {
            return Err(DispatchError::Platform(format!(
                "keysym {keysym:#06x} has no keycode on this server"
            )));
        }

        let is_press = if event.is_pressed() { xlib::True } else { xlib::False };
        // SAFETY: as above; XTestFakeKeyEvent returns 0 on failure.
        let sent = unsafe {
            let sent = xtest::XTestFakeKeyEvent(
                display.0,
                u32::from(keycode),
                is_press,
                CURRENT_TIME,
            );
            xlib::XFlush(display.0);
            sent
        };
        if sent == 0 {
            return Err(DispatchError::Platform("XTestFakeKeyEvent failed".to_string()));
        }
        Ok(())
    }
}
