//! Key symbol to macOS `CGKeyCode` table.
//!
//! CGKeyCode values are the `kVK_*` constants from Carbon's
//! `HIToolbox/Events.h`.  They name physical key positions on an ANSI
//! keyboard, so they do not change with the active keyboard layout.

use super::symbol::KeySymbol;

pub const KVK_SPACE: u16 = 0x31; // 49
pub const KVK_LEFT_ARROW: u16 = 0x7B; // 123
pub const KVK_RIGHT_ARROW: u16 = 0x7C; // 124
pub const KVK_DOWN_ARROW: u16 = 0x7D; // 125
pub const KVK_UP_ARROW: u16 = 0x7E; // 126

pub fn symbol_to_cgkeycode(symbol: KeySymbol) -> u16 {
    match symbol {
        KeySymbol::Space => KVK_SPACE,
        KeySymbol::Left => KVK_LEFT_ARROW,
        KeySymbol::Right => KVK_RIGHT_ARROW,
        KeySymbol::Up => KVK_UP_ARROW,
        KeySymbol::Down => KVK_DOWN_ARROW,
    }
}

pub fn cgkeycode_to_symbol(code: u16) -> Option<KeySymbol> {
    match code {
        KVK_SPACE => Some(KeySymbol::Space),
        KVK_LEFT_ARROW => Some(KeySymbol::Left),
        KVK_RIGHT_ARROW => Some(KeySymbol::Right),
        KVK_UP_ARROW => Some(KeySymbol::Up),
        KVK_DOWN_ARROW => Some(KeySymbol::Down),
        _ => None,
    }
}
