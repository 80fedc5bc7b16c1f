//! Landmark analysis: pure functions from hand geometry to gesture signals.
//!
//! Everything here is stateless and deterministic.  The same landmark set and
//! handedness always produce the same [`FingerState`], and nothing in this
//! module touches the OS, so it can be called from any thread at frame rate.

pub mod fingers;
pub mod landmarks;
pub mod slope;

pub use fingers::{fingers_up, FingerState};
pub use landmarks::{Handedness, LandmarkError, LandmarkSet, Point, LANDMARK_COUNT};
pub use slope::{calc_slope, calc_slope_xy, SLOPE_VERTICAL_DOWN, SLOPE_VERTICAL_UP};
