//! # gesture-core
//!
//! Pure building blocks for gesture-driven keyboard control: landmark
//! classifiers, the fixed key symbol set, per-platform key-code tables, and
//! the key event type that travels to the dispatch thread.
//!
//! This crate has zero dependencies on OS APIs or threads.  The OS-facing
//! half (event queue, worker thread, input injection) lives in
//! `gesture-keys`.
//!
//! # How the pieces fit (for beginners)
//!
//! Every camera frame, an external hand tracker reports 21 joint positions
//! per visible hand.  The **`analyzer`** turns those into simple signals:
//! which fingers are extended ([`fingers_up`]) and how steep the line
//! between two points is ([`calc_slope`]).  A gesture policy then picks one
//! of five logical keys ([`KeySymbol`]), and **`keymap`** translates that
//! key into the native code for the host OS (Windows VK codes, macOS
//! CGKeyCodes, X11 KeySyms).  The result is a [`KeyEvent`].

pub mod analyzer;
pub mod event;
pub mod keymap;
pub mod platform;

pub use analyzer::{
    calc_slope, calc_slope_xy, fingers_up, FingerState, Handedness, LandmarkError, LandmarkSet,
    Point,
};
pub use event::{KeyDirection, KeyEvent};
pub use keymap::{KeyMapper, KeySymbol};
pub use platform::Platform;
