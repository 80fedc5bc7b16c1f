//! Maps one frame of tracked hands to key actions.
//!
//! # The control scheme (for beginners)
//!
//! The player holds both hands up in front of the camera like gripping a
//! steering wheel:
//!
//! | Gesture | Action |
//! |---------|--------|
//! | Right hand closed into a fist | tap `space` |
//! | Left hand closed into a fist  | tap `down`  |
//! | Both hands visible            | steer: hold `right` or `left` |
//!
//! Steering direction comes from the slope of the line from the left wrist
//! to the right wrist.  Image y grows downward, so a positive slope means
//! the right wrist is *lower*, i.e. the "wheel" is turned clockwise.  The
//! steering key is held for `|slope| × turn_cooldown_secs`, capped at
//! `max_steer_hold`, so a sharper turn holds the key longer.
//!
//! [`GesturePolicy::evaluate`] is pure; [`perform`] plays the actions back
//! through a [`KeyHandler`].

use std::time::Duration;

use gesture_core::{
    calc_slope, fingers_up, Handedness, KeyDirection, KeySymbol, LandmarkSet, Point,
};

use super::key_handler::{KeyHandler, Submission, RELEASE_RETRY_INTERVAL};

/// Timing knobs for the policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// Hold time for `space` / `down` taps.
    pub tap_hold: Duration,
    /// Seconds of steering hold per unit of wrist slope.
    pub turn_cooldown_secs: f64,
    /// Upper bound for one steering hold.
    pub max_steer_hold: Duration,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            tap_hold: Duration::from_millis(50),
            turn_cooldown_secs: 0.6,
            max_steer_hold: Duration::from_secs(2),
        }
    }
}

/// One hand as reported by the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedHand {
    pub handedness: Handedness,
    pub landmarks: LandmarkSet,
}

/// Every hand visible in one camera frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandFrame {
    pub hands: Vec<TrackedHand>,
}

impl HandFrame {
    /// The hand labelled `handedness`; the last one wins on duplicates.
    pub fn hand(&self, handedness: Handedness) -> Option<&TrackedHand> {
        self.hands.iter().rev().find(|h| h.handedness == handedness)
    }
}

/// Press `symbol`, keep it down for `hold`, release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureAction {
    pub symbol: KeySymbol,
    pub hold: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct GesturePolicy {
    settings: GestureSettings,
}

impl GesturePolicy {
    pub fn new(settings: GestureSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// Actions for `frame`, in the order: space tap, down tap, steering.
    pub fn evaluate(&self, frame: &HandFrame) -> Vec<GestureAction> {
        let right = frame.hand(Handedness::Right);
        let left = frame.hand(Handedness::Left);
        let mut actions = Vec::new();

        if right.is_some_and(|h| fingers_up(&h.landmarks, Handedness::Right).is_fist()) {
            actions.push(self.tap(KeySymbol::Space));
        }
        if left.is_some_and(|h| fingers_up(&h.landmarks, Handedness::Left).is_fist()) {
            actions.push(self.tap(KeySymbol::Down));
        }
        if let (Some(left), Some(right)) = (left, right) {
            actions.push(self.steer(left.landmarks.wrist(), right.landmarks.wrist()));
        }

        actions
    }

    fn tap(&self, symbol: KeySymbol) -> GestureAction {
        GestureAction {
            symbol,
            hold: self.settings.tap_hold,
        }
    }

    fn steer(&self, left_wrist: Point, right_wrist: Point) -> GestureAction {
        let slope = calc_slope(left_wrist, right_wrist);
        let symbol = if slope > 0.0 {
            KeySymbol::Right
        } else {
            KeySymbol::Left
        };
        let max = self.settings.max_steer_hold;
        let hold = Duration::try_from_secs_f64((slope * self.settings.turn_cooldown_secs).abs())
            .map_or(max, |d| d.min(max));
        GestureAction { symbol, hold }
    }
}

/// Plays `action` through `handler`: key down, async sleep, key up.
///
/// The key-up waits for room on a full queue (see [`KeyHandler::release`]),
/// so a queued press is always followed by its release unless the handler
/// shuts down.  Returns `false` if the key-down was dropped or the handler
/// closed before the key-up was queued.
pub async fn perform(handler: &KeyHandler, action: GestureAction) -> bool {
    if !handler.submit(action.symbol, KeyDirection::Pressed) {
        return false;
    }
    tokio::time::sleep(action.hold).await;
    loop {
        match handler.try_submit(action.symbol, KeyDirection::Released) {
            Submission::Queued => return true,
            Submission::Closed => return false,
            Submission::Full => tokio::time::sleep(RELEASE_RETRY_INTERVAL).await,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gesture_core::analyzer::landmarks::{INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP};
    use gesture_core::{KeyEvent, Platform};

    use crate::infrastructure::dispatch::NativeInputDispatcher;
    use crate::infrastructure::input_emulation::mock::MockKeyEmitter;

    fn frame_of(hands: impl IntoIterator<Item = (Handedness, LandmarkSet)>) -> HandFrame {
        HandFrame {
            hands: hands
                .into_iter()
                .map(|(handedness, landmarks)| TrackedHand {
                    handedness,
                    landmarks,
                })
                .collect(),
        }
    }

    /// Every joint at the wrist.  Reads as a fist for a right hand.
    fn right_fist_at(x: f32, y: f32) -> LandmarkSet {
        LandmarkSet::new([Point::new(x, y); LANDMARK_COUNT])
    }

    /// Thumb tip left of its base, which is "folded" for a left hand.
    fn left_fist_at(x: f32, y: f32) -> LandmarkSet {
        let mut points = [Point::new(x, y); LANDMARK_COUNT];
        points[THUMB_TIP].x = x - 0.05;
        LandmarkSet::new(points)
    }

    /// Same pose with the index finger raised, so it is no longer a fist.
    fn pointing(set: LandmarkSet) -> LandmarkSet {
        let mut points = *set.points();
        points[INDEX_TIP].y = points[INDEX_PIP].y - 0.1;
        LandmarkSet::new(points)
    }

    #[test]
    fn test_no_hands_no_actions() {
        let policy = GesturePolicy::default();
        assert!(policy.evaluate(&HandFrame::default()).is_empty());
    }

    #[test]
    fn test_right_fist_taps_space() {
        // Arrange
        let policy = GesturePolicy::default();
        let frame = frame_of([(Handedness::Right, right_fist_at(0.6, 0.5))]);

        // Act
        let actions = policy.evaluate(&frame);

        // Assert
        assert_eq!(
            actions,
            vec![GestureAction { symbol: KeySymbol::Space, hold: Duration::from_millis(50) }]
        );
    }

    #[test]
    fn test_left_fist_taps_down() {
        let policy = GesturePolicy::default();
        let frame = frame_of([(Handedness::Left, left_fist_at(0.3, 0.5))]);
        let actions = policy.evaluate(&frame);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].symbol, KeySymbol::Down);
    }

    #[test]
    fn test_open_single_hand_does_nothing() {
        let policy = GesturePolicy::default();
        let frame = frame_of([(Handedness::Right, pointing(right_fist_at(0.6, 0.5)))]);
        assert!(policy.evaluate(&frame).is_empty());
    }

    #[test]
    fn test_both_hands_steer_right_when_right_wrist_is_lower() {
        // Arrange – slope (0.6 - 0.5) / (0.7 - 0.3) = 0.25
        let policy = GesturePolicy::default();
        let frame = frame_of([
            (Handedness::Left, pointing(left_fist_at(0.3, 0.5))),
            (Handedness::Right, pointing(right_fist_at(0.7, 0.6))),
        ]);

        // Act
        let actions = policy.evaluate(&frame);

        // Assert
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].symbol, KeySymbol::Right);
        let expected = 0.25 * 0.6;
        assert!((actions[0].hold.as_secs_f64() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_both_hands_steer_left_when_right_wrist_is_higher() {
        let policy = GesturePolicy::default();
        let frame = frame_of([
            (Handedness::Left, pointing(left_fist_at(0.3, 0.6))),
            (Handedness::Right, pointing(right_fist_at(0.7, 0.5))),
        ]);
        let actions = policy.evaluate(&frame);
        assert_eq!(actions[0].symbol, KeySymbol::Left);
        assert!((actions[0].hold.as_secs_f64() - 0.15).abs() < 1e-4);
    }

    #[test]
    fn test_level_wrists_steer_left_for_zero_hold() {
        let policy = GesturePolicy::default();
        let frame = frame_of([
            (Handedness::Left, pointing(left_fist_at(0.3, 0.5))),
            (Handedness::Right, pointing(right_fist_at(0.7, 0.5))),
        ]);
        let actions = policy.evaluate(&frame);
        assert_eq!(actions[0].symbol, KeySymbol::Left);
        assert_eq!(actions[0].hold, Duration::ZERO);
    }

    #[test]
    fn test_vertical_wrists_hold_is_capped() {
        // Same x ⇒ slope ±999, which would be a ten-minute hold uncapped.
        let policy = GesturePolicy::default();
        let frame = frame_of([
            (Handedness::Left, pointing(left_fist_at(0.5, 0.3))),
            (Handedness::Right, pointing(right_fist_at(0.5, 0.7))),
        ]);
        let actions = policy.evaluate(&frame);
        assert_eq!(actions[0].symbol, KeySymbol::Right);
        assert_eq!(actions[0].hold, Duration::from_secs(2));
    }

    #[test]
    fn test_two_fists_tap_both_then_steer() {
        let policy = GesturePolicy::default();
        let frame = frame_of([
            (Handedness::Left, left_fist_at(0.3, 0.5)),
            (Handedness::Right, right_fist_at(0.7, 0.6)),
        ]);
        let symbols: Vec<KeySymbol> = policy.evaluate(&frame).iter().map(|a| a.symbol).collect();
        assert_eq!(symbols, vec![KeySymbol::Space, KeySymbol::Down, KeySymbol::Right]);
    }

    #[test]
    fn test_duplicate_handedness_last_one_wins() {
        // Arrange – an open right hand followed by a right fist.
        let frame = frame_of([
            (Handedness::Right, pointing(right_fist_at(0.6, 0.5))),
            (Handedness::Right, right_fist_at(0.6, 0.5)),
        ]);

        // Act
        let hand = frame.hand(Handedness::Right).unwrap();

        // Assert
        assert!(fingers_up(&hand.landmarks, Handedness::Right).is_fist());
        assert!(frame.hand(Handedness::Left).is_none());
    }

    #[test]
    fn test_custom_settings_change_tap_hold() {
        let policy = GesturePolicy::new(GestureSettings {
            tap_hold: Duration::from_millis(120),
            ..GestureSettings::default()
        });
        let frame = frame_of([(Handedness::Right, right_fist_at(0.6, 0.5))]);
        assert_eq!(policy.evaluate(&frame)[0].hold, Duration::from_millis(120));
    }

    #[tokio::test]
    async fn test_perform_releases_after_a_competing_producer_fills_the_queue() {
        // Arrange – one slot and a 100 ms emitter: the "up" queued at 20 ms
        // still occupies the slot when the 50 ms steering hold ends.
        let emitter = Arc::new(MockKeyEmitter::with_delay(
            Platform::Windows,
            Duration::from_millis(100),
        ));
        let handler =
            KeyHandler::new(Arc::new(NativeInputDispatcher::new(emitter.clone())), 1).unwrap();
        let action = GestureAction {
            symbol: KeySymbol::Right,
            hold: Duration::from_millis(50),
        };
        let competitor = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handler.key_down("up")
        };

        // Act
        let (performed, competed) = tokio::join!(perform(&handler, action), competitor);
        handler.shutdown();

        // Assert – the release is delivered instead of being dropped.
        assert!(competed);
        assert!(performed);
        assert_eq!(
            emitter.events(),
            vec![KeyEvent::pressed(0x27), KeyEvent::pressed(0x26), KeyEvent::released(0x27)]
        );
    }

    #[tokio::test]
    async fn test_perform_on_a_closed_handler_sends_nothing() {
        let emitter = Arc::new(MockKeyEmitter::new(Platform::MacOs));
        let handler =
            KeyHandler::new(Arc::new(NativeInputDispatcher::new(emitter.clone())), 4).unwrap();
        handler.shutdown();
        let action = GestureAction {
            symbol: KeySymbol::Space,
            hold: Duration::ZERO,
        };
        assert!(!perform(&handler, action).await);
        assert!(emitter.events().is_empty());
    }
}
