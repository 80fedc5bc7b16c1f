//! Key symbol to X11 KeySym table for Linux.
//!
//! X11 KeySym values come from `X11/keysymdef.h`.  A KeySym names a key
//! symbolically; the XTest backend turns it into the server's hardware
//! keycode with `XKeysymToKeycode` before faking the event, because
//! `XTestFakeKeyEvent` takes a keycode, not a KeySym:
//!
//! ```text
//! KeySymbol → X11 KeySym → XKeysymToKeycode(display, keysym) → X11 keycode
//! ```
//!
//! Every KeySym in this table fits in 16 bits.

use super::symbol::KeySymbol;

pub const XK_SPACE: u16 = 0x0020;
pub const XK_LEFT: u16 = 0xFF51;
pub const XK_UP: u16 = 0xFF52;
pub const XK_RIGHT: u16 = 0xFF53;
pub const XK_DOWN: u16 = 0xFF54;

pub fn symbol_to_keysym(symbol: KeySymbol) -> u16 {
    match symbol {
        KeySymbol::Space => XK_SPACE,
        KeySymbol::Left => XK_LEFT,
        KeySymbol::Right => XK_RIGHT,
        KeySymbol::Up => XK_UP,
        KeySymbol::Down => XK_DOWN,
    }
}

pub fn keysym_to_symbol(keysym: u16) -> Option<KeySymbol> {
    match keysym {
        XK_SPACE => Some(KeySymbol::Space),
        XK_LEFT => Some(KeySymbol::Left),
        XK_RIGHT => Some(KeySymbol::Right),
        XK_UP => Some(KeySymbol::Up),
        XK_DOWN => Some(KeySymbol::Down),
        _ => None,
    }
}
