//! Platform-specific key injection.
//!
//! A [`KeyEmitter`] performs the actual OS call for one key transition.  The
//! dispatch backends decide *where* that call runs (inline on the worker or
//! on the poster thread); emitters only know *how* to inject.
//!
//! The host emitter is chosen by [`host_emitter`]; only the module for the
//! build target is compiled.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

use std::sync::Arc;

use gesture_core::{KeyEvent, Platform};

use crate::infrastructure::dispatch::DispatchError;

/// Injects key transitions into the host input stream.
pub trait KeyEmitter: Send + Sync + 'static {
    /// The platform whose key codes [`emit`](Self::emit) expects.
    fn platform(&self) -> Platform;

    /// Injects `event`, whose key code comes from this platform's table.
    fn emit(&self, event: KeyEvent) -> Result<(), DispatchError>;
}

/// Opens the emitter for the build target.
///
/// # Errors
///
/// Returns [`DispatchError::Unavailable`] if the platform input facility
/// cannot be opened, or on a target without one.
pub fn host_emitter() -> Result<Arc<dyn KeyEmitter>, DispatchError> {
    #[cfg(target_os = "windows")]
    {
        Ok(Arc::new(windows::SendInputEmitter::new()))
    }

    #[cfg(target_os = "linux")]
    {
        Ok(Arc::new(linux::XTestEmitter::open()?))
    }

    #[cfg(target_os = "macos")]
    {
        Ok(Arc::new(macos::CoreGraphicsEmitter::new()))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        Err(DispatchError::Unavailable(
            "no key injection facility on this platform".to_string(),
        ))
    }
}
