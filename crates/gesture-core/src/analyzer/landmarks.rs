//! Hand landmark snapshot types.
//!
//! # What is a landmark set? (for beginners)
//!
//! A hand-tracking model looks at one camera frame and reports 21 points on
//! the hand: the wrist plus four joints along each finger.  Each point is an
//! `(x, y)` pair in normalised image coordinates, where `(0, 0)` is the
//! top-left corner and **y grows downward**.  That last detail matters: a
//! fingertip that is "higher" on screen has a *smaller* y value.
//!
//! The joint order is fixed by the tracker:
//!
//! ```text
//!  0 wrist
//!  1  2  3  4   thumb  (CMC, MCP, IP, tip)
//!  5  6  7  8   index  (MCP, PIP, DIP, tip)
//!  9 10 11 12   middle
//! 13 14 15 16   ring
//! 17 18 19 20   pinky
//! ```
//!
//! A [`LandmarkSet`] is an immutable snapshot for a single frame.  The caller
//! builds a new one every frame and throws the old one away.

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of joints reported per hand.
pub const LANDMARK_COUNT: usize = 21;

// ── Joint indices ─────────────────────────────────────────────────────────────

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// Error returned when raw tracker output cannot form a landmark set.
#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    /// A flat coordinate slice did not contain exactly 42 values.
    #[error("expected {expected} coordinates, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A list of `(x, y)` pairs did not contain exactly 21 joints.
    #[error("expected {expected} joints, got {actual}")]
    WrongJointCount { expected: usize, actual: usize },
}

/// A single 2-D joint position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which hand a landmark set belongs to, as labelled by the tracker.
///
/// Deserializes through [`Handedness::from_label`], so `"right"` and
/// `"RIGHT"` are accepted as well as `"Right"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parses the tracker's `"Left"` / `"Right"` label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("right") {
            Some(Self::Right)
        } else if label.eq_ignore_ascii_case("left") {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }
}

impl<'de> Deserialize<'de> for Handedness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label)
            .ok_or_else(|| de::Error::unknown_variant(&label, &["Left", "Right"]))
    }
}

/// The 21 joints of one hand for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkSet {
    points: [Point; LANDMARK_COUNT],
}

impl LandmarkSet {
    /// Wraps an already-ordered array of joints.
    pub const fn new(points: [Point; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Builds a set from 42 interleaved floats: `x0, y0, x1, y1, …`.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::WrongLength`] unless `coords.len() == 42`.
    pub fn from_flat(coords: &[f32]) -> Result<Self, LandmarkError> {
        if coords.len() != LANDMARK_COUNT * 2 {
            return Err(LandmarkError::WrongLength {
                expected: LANDMARK_COUNT * 2,
                actual: coords.len(),
            });
        }
        let mut points = [Point::default(); LANDMARK_COUNT];
        for (point, xy) in points.iter_mut().zip(coords.chunks_exact(2)) {
            *point = Point::new(xy[0], xy[1]);
        }
        Ok(Self { points })
    }

    /// Builds a set from 21 `[x, y]` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::WrongJointCount`] unless exactly 21 pairs
    /// are supplied.
    pub fn from_pairs(pairs: &[[f32; 2]]) -> Result<Self, LandmarkError> {
        if pairs.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongJointCount {
                expected: LANDMARK_COUNT,
                actual: pairs.len(),
            });
        }
        let mut points = [Point::default(); LANDMARK_COUNT];
        for (point, &[x, y]) in points.iter_mut().zip(pairs) {
            *point = Point::new(x, y);
        }
        Ok(Self { points })
    }

    /// Returns the joint at `index` (see the module table).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 21`.
    pub fn joint(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn wrist(&self) -> Point {
        self.points[WRIST]
    }

    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.points
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_accepts_42_values_in_xy_order() {
        // Arrange
        let coords: Vec<f32> = (0..42).map(|i| i as f32).collect();

        // Act
        let set = LandmarkSet::from_flat(&coords).unwrap();

        // Assert
        assert_eq!(set.joint(0), Point::new(0.0, 1.0));
        assert_eq!(set.joint(4), Point::new(8.0, 9.0));
        assert_eq!(set.joint(20), Point::new(40.0, 41.0));
    }

    #[test]
    fn test_from_flat_rejects_short_slice() {
        let err = LandmarkSet::from_flat(&[0.0; 40]).unwrap_err();
        assert_eq!(err, LandmarkError::WrongLength { expected: 42, actual: 40 });
    }

    #[test]
    fn test_from_pairs_rejects_wrong_joint_count() {
        let err = LandmarkSet::from_pairs(&[[0.0, 0.0]; 20]).unwrap_err();
        assert_eq!(err, LandmarkError::WrongJointCount { expected: 21, actual: 20 });
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let pairs: Vec<[f32; 2]> = (0..21).map(|i| [i as f32, -(i as f32)]).collect();
        let set = LandmarkSet::from_pairs(&pairs).unwrap();
        assert_eq!(set.wrist(), Point::new(0.0, 0.0));
        assert_eq!(set.joint(PINKY_TIP), Point::new(20.0, -20.0));
    }

    #[test]
    fn test_handedness_from_label() {
        assert_eq!(Handedness::from_label("Right"), Some(Handedness::Right));
        assert_eq!(Handedness::from_label("left"), Some(Handedness::Left));
        assert_eq!(Handedness::from_label("both"), None);
    }
}
