//! Finger-extension classifier.
//!
//! Each finger is judged independently by comparing its tip with the joint
//! two positions closer to the palm:
//!
//! - **Index to pinky**: extended when the tip is above the PIP joint, i.e.
//!   `tip.y < pip.y` (y grows downward).  Equal heights count as folded.
//! - **Thumb**: the thumb folds sideways, so its y value says little.  It is
//!   extended when the tip lies on the outer side of the MCP joint along x.
//!   For a right hand that means `tip.x < mcp.x`; a left hand mirrors it.
//!   Rotation and depth are ignored.

use super::landmarks::{
    Handedness, LandmarkSet, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP,
    RING_PIP, RING_TIP, THUMB_MCP, THUMB_TIP,
};

/// Extension flags for one hand, ordered thumb, index, middle, ring, pinky.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    pub fn thumb(&self) -> bool {
        self.0[0]
    }

    pub fn index(&self) -> bool {
        self.0[1]
    }

    pub fn middle(&self) -> bool {
        self.0[2]
    }

    pub fn ring(&self) -> bool {
        self.0[3]
    }

    pub fn pinky(&self) -> bool {
        self.0[4]
    }

    /// The flags as `0`/`1` bytes, the shape tracker front-ends usually want.
    pub fn as_flags(&self) -> [u8; 5] {
        self.0.map(u8::from)
    }

    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }

    /// `true` when no finger is extended.
    pub fn is_fist(&self) -> bool {
        self.extended_count() == 0
    }
}

/// Tip/PIP joint pairs for the four non-thumb fingers.
const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Classifies which fingers of `landmarks` are extended.
pub fn fingers_up(landmarks: &LandmarkSet, handedness: Handedness) -> FingerState {
    let mut flags = [false; 5];

    let tip = landmarks.joint(THUMB_TIP);
    let base = landmarks.joint(THUMB_MCP);
    flags[0] = (tip.x < base.x) == handedness.is_right();

    for (flag, &(tip, pip)) in flags[1..].iter_mut().zip(FINGER_JOINTS.iter()) {
        *flag = landmarks.joint(tip).y < landmarks.joint(pip).y;
    }

    FingerState(flags)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::landmarks::{Point, LANDMARK_COUNT};

    /// A hand with every joint at (0.5, 0.5): all comparisons are ties.
    fn flat_hand() -> [Point; LANDMARK_COUNT] {
        [Point::new(0.5, 0.5); LANDMARK_COUNT]
    }

    fn with_thumb(tip_x: f32, base_x: f32) -> LandmarkSet {
        let mut points = flat_hand();
        points[THUMB_TIP].x = tip_x;
        points[THUMB_MCP].x = base_x;
        LandmarkSet::new(points)
    }

    #[test]
    fn test_right_thumb_extended_when_tip_left_of_base() {
        let state = fingers_up(&with_thumb(0.3, 0.4), Handedness::Right);
        assert!(state.thumb());
    }

    #[test]
    fn test_right_thumb_folded_when_tip_right_of_base() {
        let state = fingers_up(&with_thumb(0.5, 0.4), Handedness::Right);
        assert!(!state.thumb());
    }

    #[test]
    fn test_left_thumb_extended_when_tip_right_of_base() {
        let state = fingers_up(&with_thumb(0.5, 0.4), Handedness::Left);
        assert!(state.thumb());
    }

    #[test]
    fn test_left_thumb_folded_when_tip_left_of_base() {
        let state = fingers_up(&with_thumb(0.3, 0.4), Handedness::Left);
        assert!(!state.thumb());
    }

    #[test]
    fn test_thumb_tie_is_folded_for_right_but_extended_for_left() {
        // tip.x < base.x is false on a tie, so only the left-hand branch
        // (which expects false) reports extension.
        let hand = with_thumb(0.4, 0.4);
        assert!(!fingers_up(&hand, Handedness::Right).thumb());
        assert!(fingers_up(&hand, Handedness::Left).thumb());
    }

    #[test]
    fn test_each_finger_reads_its_own_joints() {
        // Arrange – raise only the middle finger.
        let mut points = flat_hand();
        points[MIDDLE_TIP].y = 0.2;
        points[MIDDLE_PIP].y = 0.4;

        // Act
        let state = fingers_up(&LandmarkSet::new(points), Handedness::Right);

        // Assert
        assert!(!state.index());
        assert!(state.middle());
        assert!(!state.ring());
        assert!(!state.pinky());
    }

    #[test]
    fn test_finger_equal_height_is_folded() {
        let state = fingers_up(&LandmarkSet::new(flat_hand()), Handedness::Right);
        assert_eq!(&state.0[1..], &[false; 4]);
    }

    #[test]
    fn test_finger_below_pip_is_folded() {
        let mut points = flat_hand();
        points[PINKY_TIP].y = 0.9;
        points[PINKY_PIP].y = 0.6;
        let state = fingers_up(&LandmarkSet::new(points), Handedness::Left);
        assert!(!state.pinky());
    }

    #[test]
    fn test_open_palm_reports_all_five() {
        // Arrange
        let mut points = flat_hand();
        points[THUMB_TIP].x = 0.2;
        points[THUMB_MCP].x = 0.35;
        for &(tip, pip) in &FINGER_JOINTS {
            points[tip].y = 0.1;
            points[pip].y = 0.3;
        }

        // Act
        let state = fingers_up(&LandmarkSet::new(points), Handedness::Right);

        // Assert
        assert_eq!(state.as_flags(), [1, 1, 1, 1, 1]);
        assert_eq!(state.extended_count(), 5);
        assert!(!state.is_fist());
    }

    #[test]
    fn test_is_fist_only_when_nothing_extended() {
        assert!(FingerState([false; 5]).is_fist());
        assert!(!FingerState([false, false, false, false, true]).is_fist());
    }
}
