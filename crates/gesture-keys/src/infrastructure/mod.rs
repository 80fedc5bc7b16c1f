//! Infrastructure layer: threads, OS adapters, and file/stream input.
//!
//! # Sub-modules
//!
//! - **`event_queue`** – bounded ring buffer between producers and the
//!   worker, guarded by one mutex and a condition variable.
//!
//! - **`worker`** – the single consumer thread that pops events and hands
//!   them to the dispatcher.
//!
//! - **`dispatch`** – the `KeyDispatcher` backends (native input, posting
//!   queue, no-op), chosen at runtime by `BackendKind`.
//!
//! - **`input_emulation`** – OS-specific `KeyEmitter`s: `SendInput` on
//!   Windows, XTest on Linux, CoreGraphics on macOS.  The correct one is
//!   compiled in with `#[cfg(target_os)]`.  A `MockKeyEmitter` is also
//!   provided for tests.
//!
//! - **`thread_priority`** – best-effort priority boost for the worker and
//!   poster threads.
//!
//! - **`config`** – TOML configuration file.
//!
//! - **`frame_input`** – JSON-lines hand frames read by the binary.

pub mod config;
pub mod dispatch;
pub mod event_queue;
pub mod frame_input;
pub mod input_emulation;
pub mod thread_priority;
pub mod worker;
