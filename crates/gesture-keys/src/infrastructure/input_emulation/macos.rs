//! macOS CoreGraphics key posting.
//!
//! Each event follows the usual CoreGraphics sequence:
//!
//! 1. `CGEventSourceCreate(kCGEventSourceStateHIDSystemState)`: a source
//!    that mimics hardware state.
//! 2. `CGEventCreateKeyboardEvent(source, cgkeycode, key_down)`.
//! 3. `CGEventPost(kCGHIDEventTap, event)`: inject at the HID level, the same
//!    level as a physical keyboard.
//!
//! The `core-graphics` wrappers release both objects when they drop.
//!
//! This emitter normally runs behind the posting-queue backend, so the post
//! happens on the dedicated poster thread.
//!
//! # Accessibility permission
//!
//! `CGEventPost` at the HID tap requires the Accessibility permission
//! (System Settings → Privacy & Security → Accessibility).  Without it the
//! call silently does nothing.

#![cfg(target_os = "macos")]

use core_graphics::event::{CGEvent, CGEventTapLocation};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use gesture_core::{KeyEvent, Platform};

use super::KeyEmitter;
use crate::infrastructure::dispatch::DispatchError;

/// macOS implementation of [`KeyEmitter`] using `CGEventPost`.
pub struct CoreGraphicsEmitter;

impl CoreGraphicsEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoreGraphicsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyEmitter for CoreGraphicsEmitter {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn emit(&self, event: KeyEvent) -> Result<(), DispatchError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState).map_err(|()| {
            DispatchError::Platform("CGEventSourceCreate returned null".to_string())
        })?;
        let key_event = CGEvent::new_keyboard_event(source, event.keycode, event.is_pressed())
            .map_err(|()| {
                DispatchError::Platform(format!(
                    "CGEventCreateKeyboardEvent failed for key {}",
                    event.keycode
                ))
            })?;
        key_event.post(CGEventTapLocation::HID);
        Ok(())
    }
}
