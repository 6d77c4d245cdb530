#![forbid(unsafe_code)]

//! The student swiper: controller, input dispatcher and profile panel.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use swiper_core::event::{KeyCode, KeyEvent};
//! use swiper_widgets::{Card, CardDeck, CarouselConfig, CarouselInput, StudentSwiper};
//!
//! let deck = CardDeck::new((0..5).map(|i| Card::new().data_name(format!("S{i}"))));
//! let mut swiper = StudentSwiper::new(deck, CarouselConfig::default(), Duration::ZERO);
//!
//! let right = CarouselInput::Key(KeyEvent::new(KeyCode::Right));
//! swiper.handle(&right, Duration::ZERO);
//! assert_eq!(swiper.controller().center(), Some(3));
//! assert_eq!(swiper.controller().status().position.as_deref(), Some("4 / 5"));
//! ```

use std::time::Duration;

use swiper_core::gesture::SwipeConfig;

use crate::card::CardDeck;
use crate::carousel::{CarouselConfig, CarouselController};
use crate::dispatch::{CarouselAction, CarouselInput, InputDispatcher};
use crate::profile::ProfilePanel;

/// Carousel plus its input adapters and profile panel.
#[derive(Debug)]
pub struct StudentSwiper {
    controller: CarouselController,
    dispatcher: InputDispatcher,
    panel: ProfilePanel,
}

impl StudentSwiper {
    /// Build the swiper and run the initial layout at `now`.
    #[must_use]
    pub fn new(deck: CardDeck, config: CarouselConfig, now: Duration) -> Self {
        Self::with_swipe(deck, config, SwipeConfig::default(), now)
    }

    /// Build with a custom swipe configuration.
    #[must_use]
    pub fn with_swipe(
        deck: CardDeck,
        config: CarouselConfig,
        swipe: SwipeConfig,
        now: Duration,
    ) -> Self {
        Self {
            controller: CarouselController::new(deck, config, now),
            dispatcher: InputDispatcher::new(swipe),
            panel: ProfilePanel::new(),
        }
    }

    /// The carousel state machine.
    #[must_use]
    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// The profile panel.
    #[must_use]
    pub fn panel(&self) -> &ProfilePanel {
        &self.panel
    }

    /// Dispatch one raw input and apply the resulting action.
    ///
    /// Returns the action if it changed anything.
    pub fn handle(&mut self, input: &CarouselInput, now: Duration) -> Option<CarouselAction> {
        let action = self.dispatcher.dispatch(input, now)?;
        self.apply(action, now).then_some(action)
    }

    /// Apply a semantic action. Returns `false` if it was dropped.
    pub fn apply(&mut self, action: CarouselAction, now: Duration) -> bool {
        match action {
            CarouselAction::Prev => self.controller.rotate_prev(now),
            CarouselAction::Next => self.controller.rotate_next(now),
            CarouselAction::Select(index) => self.controller.select_index(index, now),
            CarouselAction::ViewProfile => match self.controller.view_profile() {
                Some(snapshot) => {
                    self.panel.open(snapshot);
                    true
                }
                None => false,
            },
            CarouselAction::CloseProfile => self.panel.close(),
        }
    }

    /// Fire deferred carousel actions due at `now`.
    pub fn advance(&mut self, now: Duration) -> usize {
        self.controller.advance(now)
    }

    /// Deadline of the next deferred action.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.controller.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::dispatch::CarouselTarget;

    fn swiper() -> StudentSwiper {
        let deck = CardDeck::new([
            Card::new().data_name("Ani").email("ani@kelas.id"),
            Card::new().name_text("Budi").bio("Suka robotika"),
            Card::new().data_name("Citra").avatar("img/citra.png"),
        ]);
        StudentSwiper::new(deck, CarouselConfig::default(), Duration::ZERO)
    }

    fn click(target: CarouselTarget) -> CarouselInput {
        CarouselInput::Click(target)
    }

    #[test]
    fn view_profile_snapshots_center() {
        let mut s = swiper();
        assert_eq!(
            s.handle(&click(CarouselTarget::ViewProfileButton), Duration::ZERO),
            Some(CarouselAction::ViewProfile)
        );
        let snap = s.panel().snapshot().unwrap();
        assert_eq!(snap.name, "Budi");
        assert_eq!(snap.bio, "Suka robotika");
        assert_eq!(snap.email, "");
    }

    #[test]
    fn open_panel_ignores_later_rotation() {
        let mut s = swiper();
        s.apply(CarouselAction::ViewProfile, Duration::ZERO);
        s.apply(CarouselAction::Next, Duration::ZERO);
        assert_eq!(s.controller().center(), Some(2));
        assert!(s.panel().is_open());
        assert_eq!(s.panel().snapshot().unwrap().name, "Budi");
    }

    #[test]
    fn close_profile_reports_change_once() {
        let mut s = swiper();
        s.apply(CarouselAction::ViewProfile, Duration::ZERO);
        assert_eq!(
            s.handle(&click(CarouselTarget::CloseProfileButton), Duration::ZERO),
            Some(CarouselAction::CloseProfile)
        );
        assert_eq!(
            s.handle(&click(CarouselTarget::CloseProfileButton), Duration::ZERO),
            None
        );
    }

    #[test]
    fn dropped_rotation_returns_none() {
        let mut s = swiper();
        let next = click(CarouselTarget::NextButton);
        assert!(s.handle(&next, Duration::ZERO).is_some());
        assert!(s.handle(&next, Duration::from_millis(150)).is_none());
        // Two pops (initial layout and rotation) plus the lock release.
        assert_eq!(s.advance(Duration::from_millis(300)), 3);
        assert!(s.handle(&next, Duration::from_millis(300)).is_some());
        assert_eq!(s.controller().center(), Some(0));
    }

    #[test]
    fn empty_swiper_cannot_view_profile() {
        let mut s = StudentSwiper::new(CardDeck::default(), CarouselConfig::default(), Duration::ZERO);
        assert!(!s.apply(CarouselAction::ViewProfile, Duration::ZERO));
        assert!(!s.panel().is_open());
        assert_eq!(s.next_deadline(), None);
    }
}
