//! Key transition events carried from producers to the dispatch thread.

use serde::{Deserialize, Serialize};

/// Whether a key goes down or comes back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyDirection {
    Pressed,
    Released,
}

/// A single key transition with a platform-native key code.
///
/// The key code is only meaningful together with the [`Platform`] whose
/// table produced it (see [`crate::keymap::KeyMapper`]).
///
/// [`Platform`]: crate::platform::Platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub direction: KeyDirection,
    pub keycode: u16,
}

impl KeyEvent {
    pub const fn pressed(keycode: u16) -> Self {
        Self { direction: KeyDirection::Pressed, keycode }
    }

    pub const fn released(keycode: u16) -> Self {
        Self { direction: KeyDirection::Released, keycode }
    }

    pub fn is_pressed(&self) -> bool {
        self.direction == KeyDirection::Pressed
    }
}
