#![forbid(unsafe_code)]

//! Input dispatch for the carousel.
//!
//! [`InputDispatcher`] is the single place where raw input becomes a
//! semantic [`CarouselAction`]. It knows nothing about carousel state, so the
//! controller can be driven directly in tests and the mapping can be tested
//! without a controller.
//!
//! | Input | Action |
//! |-------|--------|
//! | `ArrowLeft` press (anywhere) | `Prev` |
//! | `ArrowRight` press (anywhere) | `Next` |
//! | Drag on the card list, delta > +threshold | `Next` |
//! | Drag on the card list, delta < -threshold | `Prev` |
//! | Click prev / next button | `Prev` / `Next` |
//! | Click card `i` | `Select(i)` |
//! | Click view-profile / close button | `ViewProfile` / `CloseProfile` |
//!
//! A card click that ends a drag which already produced a swipe is
//! swallowed, so one gesture never both rotates and selects. The click only
//! counts as ending the drag if it arrives within the configured click
//! window after `Up` and before any key press or button click.

use std::time::Duration;

use swiper_core::event::{KeyCode, KeyEvent, PointerEvent, PointerKind};
use swiper_core::gesture::{SwipeConfig, SwipeDirection, SwipeRecognizer};

/// Semantic carousel action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselAction {
    /// Rotate one card back.
    Prev,
    /// Rotate one card forward.
    Next,
    /// Center the card at this index.
    Select(usize),
    /// Open the profile panel for the centered card.
    ViewProfile,
    /// Close the profile panel.
    CloseProfile,
}

/// Clickable carousel elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselTarget {
    /// The previous button.
    PrevButton,
    /// The next button.
    NextButton,
    /// A card (or any descendant of it) at this index.
    Card(usize),
    /// The view-profile trigger.
    ViewProfileButton,
    /// The profile panel close trigger.
    CloseProfileButton,
}

/// Raw carousel input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    /// A global key event.
    Key(KeyEvent),
    /// A pointer event on the card list.
    Pointer(PointerEvent),
    /// A click on a carousel element.
    Click(CarouselTarget),
}

/// Maps [`CarouselInput`] to [`CarouselAction`].
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    swipe: SwipeRecognizer,
    swipe_released_at: Option<Duration>,
}

impl InputDispatcher {
    /// Create a dispatcher with the given swipe configuration.
    #[must_use]
    pub fn new(swipe: SwipeConfig) -> Self {
        Self {
            swipe: SwipeRecognizer::new(swipe),
            swipe_released_at: None,
        }
    }

    /// The swipe recognizer.
    #[must_use]
    pub fn swipe(&self) -> &SwipeRecognizer {
        &self.swipe
    }

    /// Translate one input received at `now`.
    pub fn dispatch(&mut self, input: &CarouselInput, now: Duration) -> Option<CarouselAction> {
        match input {
            CarouselInput::Key(key) => {
                self.forget_swipe();
                Self::map_key(key)
            }
            CarouselInput::Pointer(pointer) => self.map_pointer(pointer, now),
            CarouselInput::Click(target) => self.map_click(*target, now),
        }
    }

    fn map_pointer(&mut self, pointer: &PointerEvent, now: Duration) -> Option<CarouselAction> {
        let direction = self.swipe.update(pointer);
        match pointer.kind {
            PointerKind::Down => self.swipe_released_at = None,
            PointerKind::Up | PointerKind::Cancel if self.swipe.last_gesture_fired() => {
                self.swipe_released_at = Some(now);
            }
            _ => {}
        }
        direction.map(|direction| match direction {
            SwipeDirection::Forward => CarouselAction::Next,
            SwipeDirection::Backward => CarouselAction::Prev,
        })
    }

    /// Whether a card click at `now` is the tail of a swiping gesture.
    /// Consumes the gesture either way.
    fn click_ends_swipe(&mut self, now: Duration) -> bool {
        let fired = self.swipe.take_gesture_fired();
        let released = self.swipe_released_at.take();
        let window = self.swipe.config().click_window;
        fired && released.is_none_or(|at| now.saturating_sub(at) <= window)
    }

    fn forget_swipe(&mut self) {
        self.swipe.take_gesture_fired();
        self.swipe_released_at = None;
    }

    fn map_key(key: &KeyEvent) -> Option<CarouselAction> {
        if !key.is_press() {
            return None;
        }
        match key.code {
            KeyCode::Left => Some(CarouselAction::Prev),
            KeyCode::Right => Some(CarouselAction::Next),
            _ => None,
        }
    }

    fn map_click(&mut self, target: CarouselTarget, now: Duration) -> Option<CarouselAction> {
        let action = match target {
            CarouselTarget::PrevButton => CarouselAction::Prev,
            CarouselTarget::NextButton => CarouselAction::Next,
            CarouselTarget::Card(index) => {
                if self.click_ends_swipe(now) {
                    swiper_core::trace!(index, "card click swallowed after swipe");
                    return None;
                }
                return Some(CarouselAction::Select(index));
            }
            CarouselTarget::ViewProfileButton => CarouselAction::ViewProfile,
            CarouselTarget::CloseProfileButton => CarouselAction::CloseProfile,
        };
        self.forget_swipe();
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiper_core::event::KeyEventKind;

    const T0: Duration = Duration::ZERO;

    fn drag(d: &mut InputDispatcher, from: f32, to: f32) -> Vec<CarouselAction> {
        [
            PointerEvent::touch(PointerKind::Down, from, 0.0),
            PointerEvent::touch(PointerKind::Move, (from + to) / 2.0, 0.0),
            PointerEvent::touch(PointerKind::Move, to, 0.0),
            PointerEvent::touch(PointerKind::Up, to, 0.0),
        ]
        .iter()
        .filter_map(|p| d.dispatch(&CarouselInput::Pointer(*p), T0))
        .collect()
    }

    fn click_card(d: &mut InputDispatcher, index: usize, now: Duration) -> Option<CarouselAction> {
        d.dispatch(&CarouselInput::Click(CarouselTarget::Card(index)), now)
    }

    #[test]
    fn arrow_keys_rotate() {
        let mut d = InputDispatcher::default();
        let left = CarouselInput::Key(KeyEvent::new(KeyCode::Left));
        let right = CarouselInput::Key(KeyEvent::new(KeyCode::Right));
        assert_eq!(d.dispatch(&left, T0), Some(CarouselAction::Prev));
        assert_eq!(d.dispatch(&right, T0), Some(CarouselAction::Next));
    }

    #[test]
    fn key_release_and_other_keys_ignored() {
        let mut d = InputDispatcher::default();
        let release = KeyEvent::new(KeyCode::Left).with_kind(KeyEventKind::Release);
        assert_eq!(d.dispatch(&CarouselInput::Key(release), T0), None);
        assert_eq!(
            d.dispatch(&CarouselInput::Key(KeyEvent::new(KeyCode::Up)), T0),
            None
        );
    }

    #[test]
    fn forty_pixel_drag_does_nothing() {
        let mut d = InputDispatcher::default();
        assert!(drag(&mut d, 200.0, 160.0).is_empty());
    }

    #[test]
    fn sixty_pixel_positive_drag_is_one_next() {
        let mut d = InputDispatcher::default();
        assert_eq!(drag(&mut d, 200.0, 140.0), vec![CarouselAction::Next]);
    }

    #[test]
    fn sixty_pixel_negative_drag_is_one_prev() {
        let mut d = InputDispatcher::default();
        assert_eq!(drag(&mut d, 140.0, 200.0), vec![CarouselAction::Prev]);
    }

    #[test]
    fn buttons_map_directly() {
        let mut d = InputDispatcher::default();
        let cases = [
            (CarouselTarget::PrevButton, CarouselAction::Prev),
            (CarouselTarget::NextButton, CarouselAction::Next),
            (CarouselTarget::Card(3), CarouselAction::Select(3)),
            (CarouselTarget::ViewProfileButton, CarouselAction::ViewProfile),
            (CarouselTarget::CloseProfileButton, CarouselAction::CloseProfile),
        ];
        for (target, action) in cases {
            assert_eq!(d.dispatch(&CarouselInput::Click(target), T0), Some(action));
        }
    }

    #[test]
    fn click_ending_a_swipe_is_swallowed() {
        let mut d = InputDispatcher::default();
        assert_eq!(drag(&mut d, 300.0, 100.0), vec![CarouselAction::Next]);
        assert_eq!(click_card(&mut d, 1, T0), None);
        assert_eq!(click_card(&mut d, 1, T0), Some(CarouselAction::Select(1)));
    }

    #[test]
    fn click_inside_window_is_swallowed() {
        let mut d = InputDispatcher::default();
        drag(&mut d, 300.0, 100.0);
        assert_eq!(click_card(&mut d, 1, Duration::from_millis(300)), None);
    }

    #[test]
    fn click_after_window_selects() {
        let mut d = InputDispatcher::default();
        drag(&mut d, 300.0, 100.0);
        assert_eq!(
            click_card(&mut d, 1, Duration::from_millis(301)),
            Some(CarouselAction::Select(1))
        );
    }

    #[test]
    fn key_press_ends_the_swipe() {
        let mut d = InputDispatcher::default();
        drag(&mut d, 300.0, 100.0);
        d.dispatch(&CarouselInput::Key(KeyEvent::new(KeyCode::Left)), T0);
        assert_eq!(click_card(&mut d, 0, T0), Some(CarouselAction::Select(0)));
    }

    #[test]
    fn button_click_ends_the_swipe() {
        let mut d = InputDispatcher::default();
        drag(&mut d, 300.0, 100.0);
        d.dispatch(&CarouselInput::Click(CarouselTarget::NextButton), T0);
        assert_eq!(click_card(&mut d, 4, T0), Some(CarouselAction::Select(4)));
    }

    #[test]
    fn click_after_short_drag_selects() {
        let mut d = InputDispatcher::default();
        assert!(drag(&mut d, 100.0, 110.0).is_empty());
        assert_eq!(click_card(&mut d, 2, T0), Some(CarouselAction::Select(2)));
    }
}
