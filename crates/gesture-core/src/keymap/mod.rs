//! Key code translation for the fixed gesture symbol set.
//!
//! Producers speak in [`KeySymbol`]s.  The dispatch thread speaks in
//! platform-native codes.  [`KeyMapper`] is the single table both sides use,
//! so a key-down queued by a producer and the code injected by the backend
//! can never disagree.

pub mod linux_x11;
pub mod macos_cg;
pub mod symbol;
pub mod windows_vk;

pub use symbol::KeySymbol;

use crate::platform::Platform;

/// Unified key mapper for every platform.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates `symbol` to the native key code on `platform`.
    ///
    /// - Windows: Virtual Key code.
    /// - macOS: `CGKeyCode`.
    /// - Linux: X11 KeySym.
    pub fn key_code(platform: Platform, symbol: KeySymbol) -> u16 {
        match platform {
            Platform::Windows => windows_vk::symbol_to_vk(symbol),
            Platform::MacOs => macos_cg::symbol_to_cgkeycode(symbol),
            Platform::Linux => linux_x11::symbol_to_keysym(symbol),
        }
    }

    /// Reverse lookup, used for logging dispatched events.
    pub fn symbol_for(platform: Platform, code: u16) -> Option<KeySymbol> {
        match platform {
            Platform::Windows => windows_vk::vk_to_symbol(code),
            Platform::MacOs => macos_cg::cgkeycode_to_symbol(code),
            Platform::Linux => linux_x11::keysym_to_symbol(code),
        }
    }

    /// Parses caller input and maps it in one step.
    ///
    /// Returns `None` for empty or unknown input.
    pub fn lookup(platform: Platform, input: &str) -> Option<u16> {
        KeySymbol::parse(input).map(|symbol| Self::key_code(platform, symbol))
    }
}
