//! JSON-lines hand frames from an external tracker.
//!
//! One object per line:
//!
//! ```json
//! {"hands":[{"handedness":"Right","landmarks":[[0.51,0.80],[0.47,0.77], …]}]}
//! ```
//!
//! `handedness` is matched case-insensitively.  `landmarks` must hold exactly
//! 21 `[x, y]` pairs in normalised image coordinates.  A frame with no visible hands has `"hands": []`.

use gesture_core::{Handedness, LandmarkError, LandmarkSet};
use serde::Deserialize;
use thiserror::Error;

use crate::application::gesture_policy::{HandFrame, TrackedHand};

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("malformed frame JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad landmarks: {0}")]
    Landmarks(#[from] LandmarkError),
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(default)]
    hands: Vec<RawHand>,
}

#[derive(Debug, Deserialize)]
struct RawHand {
    handedness: Handedness,
    landmarks: Vec<[f32; 2]>,
}

/// Parses one input line.  Blank lines yield `Ok(None)`.
pub fn parse_frame(line: &str) -> Result<Option<HandFrame>, FrameError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let raw: RawFrame = serde_json::from_str(line)?;
    let hands = raw
        .hands
        .into_iter()
        .map(|hand| {
            Ok(TrackedHand {
                handedness: hand.handedness,
                landmarks: LandmarkSet::from_pairs(&hand.landmarks)?,
            })
        })
        .collect::<Result<Vec<_>, LandmarkError>>()?;

    Ok(Some(HandFrame { hands }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_json(count: usize) -> String {
        let pairs: Vec<String> = (0..count)
            .map(|i| format!("[{:.2},{:.2}]", 0.3 + i as f32 * 0.01, 0.5))
            .collect();
        format!("[{}]", pairs.join(","))
    }

    #[test]
    fn test_parse_frame_with_two_hands() {
        // Arrange
        let line = format!(
            r#"{{"hands":[{{"handedness":"Left","landmarks":{0}}},{{"handedness":"Right","landmarks":{0}}}]}}"#,
            pairs_json(21)
        );

        // Act
        let frame = parse_frame(&line).unwrap().expect("non-blank line");

        // Assert
        assert_eq!(frame.hands.len(), 2);
        assert_eq!(frame.hands[0].handedness, Handedness::Left);
        assert_eq!(frame.hands[1].handedness, Handedness::Right);
        assert!((frame.hands[0].landmarks.wrist().x - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert!(parse_frame("   ").unwrap().is_none());
        assert!(parse_frame("").unwrap().is_none());
    }

    #[test]
    fn test_empty_hands_is_a_valid_frame() {
        let frame = parse_frame(r#"{"hands":[]}"#).unwrap().unwrap();
        assert!(frame.hands.is_empty());
    }

    #[test]
    fn test_wrong_landmark_count_is_rejected() {
        let line = format!(
            r#"{{"hands":[{{"handedness":"Right","landmarks":{}}}]}}"#,
            pairs_json(20)
        );
        assert!(matches!(parse_frame(&line), Err(FrameError::Landmarks(_))));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(parse_frame("{\"hands\": ["), Err(FrameError::Json(_))));
    }

    #[test]
    fn test_unknown_handedness_is_rejected() {
        let line = format!(
            r#"{{"hands":[{{"handedness":"Middle","landmarks":{}}}]}}"#,
            pairs_json(21)
        );
        assert!(matches!(parse_frame(&line), Err(FrameError::Json(_))));
    }

    #[test]
    fn test_handedness_label_is_case_insensitive() {
        // Arrange
        let line = format!(
            r#"{{"hands":[{{"handedness":"right","landmarks":{0}}},{{"handedness":"LEFT","landmarks":{0}}}]}}"#,
            pairs_json(21)
        );

        // Act
        let frame = parse_frame(&line).unwrap().unwrap();

        // Assert
        assert_eq!(frame.hands[0].handedness, Handedness::Right);
        assert_eq!(frame.hands[1].handedness, Handedness::Left);
    }
}
