//! Application layer: what producers call.
//!
//! - **`key_handler`** – [`KeyHandler`](key_handler::KeyHandler) owns the
//!   event queue and the worker thread, validates symbols, and maps them to
//!   native key codes for the selected dispatcher.
//!
//! - **`gesture_policy`** – turns a frame of tracked hands into a list of
//!   key taps and steering holds, and plays them back through a handler.

pub mod gesture_policy;
pub mod key_handler;
