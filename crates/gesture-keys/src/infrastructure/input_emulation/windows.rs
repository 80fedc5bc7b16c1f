//! Windows key injection via the SendInput API.
//!
//! Events are injected by **scan code** rather than by VK code: the VK code
//! from the key table is translated with `MapVirtualKeyW(vk,
//! MAPVK_VK_TO_VSC)` and sent with `KEYEVENTF_SCANCODE`.  Games that read raw
//! keyboard input (DirectInput / Raw Input) ignore VK-only synthetic events
//! but accept scan-code ones.
//!
//! Arrow keys additionally need `KEYEVENTF_EXTENDEDKEY`, otherwise their scan
//! codes are read as numeric-keypad keys.

#![cfg(target_os = "windows")]

use gesture_core::{keymap::windows_vk, KeyEvent, Platform};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, KEYEVENTF_SCANCODE, MAPVK_VK_TO_VSC, VIRTUAL_KEY,
};

use super::KeyEmitter;
use crate::infrastructure::dispatch::DispatchError;

/// Windows implementation of [`KeyEmitter`] using SendInput.
pub struct SendInputEmitter;

impl SendInputEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SendInputEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyEmitter for SendInputEmitter {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn emit(&self, event: KeyEvent) -> Result<(), DispatchError> {
        let vk = event.keycode;
        // SAFETY: MapVirtualKeyW has no pointer arguments.
        let scan = unsafe { MapVirtualKeyW(u32::from(vk), MAPVK_VK_TO_VSC) } as u16;
        if scan == 0 {
            return Err(DispatchError::Platform(format!("no scan code for VK {vk:#04x}")));
        }

        let input = INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(0),
                    wScan: scan,
                    dwFlags: key_flags(vk, event.is_pressed()),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };

        // SAFETY: input is a valid KEYBDINPUT structure on the stack
        let inserted = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
        if inserted == 0 {
            return Err(DispatchError::Platform(format!(
                "SendInput rejected the event: {}",
                windows::core::Error::from_win32()
            )));
        }
        Ok(())
    }
}

fn key_flags(vk: u16, pressed: bool) -> KEYBD_EVENT_FLAGS {
    let mut flags = KEYEVENTF_SCANCODE;
    if !pressed {
        flags |= KEYEVENTF_KEYUP;
    }
    if windows_vk::is_extended(vk) {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    flags
}
