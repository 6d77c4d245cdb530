#![forbid(unsafe_code)]

//! Horizontal swipe recognition.
//!
//! [`SwipeRecognizer`] consumes [`PointerEvent`]s from a single surface and
//! emits at most one [`SwipeDirection`] per gesture.
//!
//! # Invariants
//!
//! 1. A gesture starts on `Down` and ends on `Up` or `Cancel`.
//! 2. The drag delta is `start_x - current_x`; a finger moving left yields a
//!    positive delta.
//! 3. A swipe fires once the magnitude of the delta is strictly greater than
//!    the threshold, and never fires twice within one gesture.
//! 4. `Move` events outside a gesture are ignored.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | `Move` without `Down` | Host dropped the start event | Ignored |
//! | `Down` while tracking | Host dropped the end event | Gesture restarts |

use std::time::Duration;

use crate::event::{PointerEvent, PointerKind};

/// Default time after a swiping gesture ends during which a click on the
/// swiped surface still belongs to that gesture.
pub const DEFAULT_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Configuration for swipe detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel in pixels before a swipe fires (default: 50).
    ///
    /// The comparison is strict: travel of exactly the threshold is ignored.
    pub threshold_px: f32,
    /// How long after `Up` a click is still part of a swiping gesture
    /// (default: 300ms).
    pub click_window: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            click_window: DEFAULT_CLICK_WINDOW,
        }
    }
}

impl SwipeConfig {
    /// Create a config with a custom threshold.
    #[must_use]
    pub fn with_threshold(mut self, px: f32) -> Self {
        self.threshold_px = px;
        self
    }

    /// Create a config with a custom click window.
    #[must_use]
    pub fn with_click_window(mut self, window: Duration) -> Self {
        self.click_window = window;
        self
    }
}

/// Direction of a recognized swipe, named after its effect on the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Positive delta (finger moved left): advance to the next item.
    Forward,
    /// Negative delta (finger moved right): go back to the previous item.
    Backward,
}

/// Recognizer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeState {
    /// No pointer is down.
    Idle,
    /// Pointer is down and has not travelled past the threshold yet.
    Tracking {
        /// Horizontal position at `Down`.
        start_x: f32,
    },
    /// The current gesture already produced a swipe.
    Fired,
}

/// Single-surface swipe recognizer.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    state: SwipeState,
    last_gesture_fired: bool,
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: SwipeState::Idle,
            last_gesture_fired: false,
        }
    }

    /// Current recognizer state.
    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Feed one pointer event; returns the swipe it completes, if any.
    pub fn update(&mut self, event: &PointerEvent) -> Option<SwipeDirection> {
        match (event.kind, self.state) {
            (PointerKind::Down, _) => {
                self.state = SwipeState::Tracking { start_x: event.x };
                self.last_gesture_fired = false;
                None
            }
            (PointerKind::Move, SwipeState::Tracking { start_x }) => {
                let delta = start_x - event.x;
                if delta.abs() <= self.config.threshold_px {
                    return None;
                }
                self.state = SwipeState::Fired;
                self.last_gesture_fired = true;
                let direction = if delta > 0.0 {
                    SwipeDirection::Forward
                } else {
                    SwipeDirection::Backward
                };
                crate::trace!(delta, ?direction, "swipe recognized");
                Some(direction)
            }
            (PointerKind::Move, _) => None,
            (PointerKind::Up | PointerKind::Cancel, _) => {
                self.state = SwipeState::Idle;
                None
            }
        }
    }

    /// Whether the most recent gesture produced a swipe.
    ///
    /// Stays set after `Up` until the next `Down`, so a click delivered at the
    /// end of the same gesture can be recognized as part of the drag.
    #[must_use]
    pub fn last_gesture_fired(&self) -> bool {
        self.last_gesture_fired
    }

    /// Read and clear [`last_gesture_fired`](Self::last_gesture_fired).
    pub fn take_gesture_fired(&mut self) -> bool {
        std::mem::take(&mut self.last_gesture_fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f32) -> PointerEvent {
        PointerEvent::touch(PointerKind::Down, x, 0.0)
    }

    fn mv(x: f32) -> PointerEvent {
        PointerEvent::touch(PointerKind::Move, x, 0.0)
    }

    fn up(x: f32) -> PointerEvent {
        PointerEvent::touch(PointerKind::Up, x, 0.0)
    }

    #[test]
    fn small_drag_is_ignored() {
        let mut rec = SwipeRecognizer::default();
        assert_eq!(rec.update(&down(200.0)), None);
        assert_eq!(rec.update(&mv(160.0)), None);
        assert_eq!(rec.update(&up(160.0)), None);
        assert!(!rec.last_gesture_fired());
    }

    #[test]
    fn left_drag_past_threshold_goes_forward() {
        let mut rec = SwipeRecognizer::default();
        rec.update(&down(200.0));
        assert_eq!(rec.update(&mv(140.0)), Some(SwipeDirection::Forward));
    }

    #[test]
    fn right_drag_past_threshold_goes_backward() {
        let mut rec = SwipeRecognizer::default();
        rec.update(&down(100.0));
        assert_eq!(rec.update(&mv(160.0)), Some(SwipeDirection::Backward));
    }

    #[test]
    fn exact_threshold_does_not_fire() {
        let mut rec = SwipeRecognizer::default();
        rec.update(&down(100.0));
        assert_eq!(rec.update(&mv(50.0)), None);
        assert_eq!(rec.state(), SwipeState::Tracking { start_x: 100.0 });
    }

    #[test]
    fn fires_once_per_gesture() {
        let mut rec = SwipeRecognizer::default();
        rec.update(&down(300.0));
        assert!(rec.update(&mv(200.0)).is_some());
        assert_eq!(rec.update(&mv(0.0)), None);
        assert_eq!(rec.update(&mv(-200.0)), None);
        rec.update(&up(-200.0));
        assert!(rec.last_gesture_fired());
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut rec = SwipeRecognizer::default();
        assert_eq!(rec.update(&mv(500.0)), None);
        assert_eq!(rec.state(), SwipeState::Idle);
    }

    #[test]
    fn cancel_resets_tracking() {
        let mut rec = SwipeRecognizer::default();
        rec.update(&down(100.0));
        rec.update(&PointerEvent::touch(PointerKind::Cancel, 100.0, 0.0));
        assert_eq!(rec.update(&mv(0.0)), None);
    }

    #[test]
    fn take_gesture_fired_clears_flag() {
        let mut rec = SwipeRecognizer::default();
        rec.update(&down(100.0));
        rec.update(&mv(0.0));
        rec.update(&up(0.0));
        assert!(rec.take_gesture_fired());
        assert!(!rec.take_gesture_fired());
    }

    #[test]
    fn click_window_defaults_and_overrides() {
        assert_eq!(SwipeConfig::default().click_window, DEFAULT_CLICK_WINDOW);
        let config = SwipeConfig::default().with_click_window(Duration::from_millis(80));
        assert_eq!(config.click_window, Duration::from_millis(80));
        assert_eq!(config.threshold_px, 50.0);
    }

    #[test]
    fn custom_threshold() {
        let mut rec = SwipeRecognizer::new(SwipeConfig::default().with_threshold(10.0));
        rec.update(&down(100.0));
        assert_eq!(rec.update(&mv(89.0)), Some(SwipeDirection::Forward));
    }
}
