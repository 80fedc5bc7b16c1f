//! Key symbol to Windows Virtual Key (VK) code table.
//!
//! # What is a Windows Virtual Key (VK) code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code",
//! defined in `<winuser.h>` as `VK_*` constants (e.g. `VK_SPACE = 0x20`).
//! They represent *logical* keys rather than physical scan codes.  The input
//! backend converts the VK code to a hardware scan code with
//! `MapVirtualKeyW(vk, MAPVK_VK_TO_VSC)` right before injection.
//!
//! # Extended keys
//!
//! The arrow keys live on the "extended" part of the keyboard and share scan
//! codes with the numeric keypad.  When injecting by scan code, the
//! `KEYEVENTF_EXTENDEDKEY` flag tells Windows which of the two was meant.
//! [`is_extended`] reports which VK codes need that flag.

use super::symbol::KeySymbol;

pub const VK_SPACE: u16 = 0x20;
pub const VK_LEFT: u16 = 0x25;
pub const VK_UP: u16 = 0x26;
pub const VK_RIGHT: u16 = 0x27;
pub const VK_DOWN: u16 = 0x28;

pub fn symbol_to_vk(symbol: KeySymbol) -> u16 {
    match symbol {
        KeySymbol::Space => VK_SPACE,
        KeySymbol::Left => VK_LEFT,
        KeySymbol::Right => VK_RIGHT,
        KeySymbol::Up => VK_UP,
        KeySymbol::Down => VK_DOWN,
    }
}

pub fn vk_to_symbol(vk: u16) -> Option<KeySymbol> {
    match vk {
        VK_SPACE => Some(KeySymbol::Space),
        VK_LEFT => Some(KeySymbol::Left),
        VK_RIGHT => Some(KeySymbol::Right),
        VK_UP => Some(KeySymbol::Up),
        VK_DOWN => Some(KeySymbol::Down),
        _ => None,
    }
}

/// Whether `vk` must be injected with `KEYEVENTF_EXTENDEDKEY`.
pub fn is_extended(vk: u16) -> bool {
    matches!(vk, VK_LEFT | VK_UP | VK_RIGHT | VK_DOWN)
}
