#![forbid(unsafe_code)]

//! Carousel controller.
//!
//! [`CarouselController`] owns the centered index over a fixed [`CardDeck`]
//! and re-projects the layout after every state change.
//!
//! # State machine
//!
//! The only domain state is `center`. Rotations are guarded by an
//! [`AnimationLock`]: a rotation engages it and schedules
//! [`CarouselTimer::ReleaseLock`] one cooldown later; rotations and direct
//! selections arriving while it is held are dropped, never queued.
//!
//! # Invariants
//!
//! 1. With `n > 0`, `center < n` and exactly one card carries
//!    [`CardClasses::CENTER`] after every layout pass.
//! 2. With `n == 0` every operation is a no-op and no timer is scheduled.
//! 3. The layout for a transition is complete when the call returns; only
//!    the pop marker and the lock release are deferred.
//! 4. No timer is ever cancelled. The lock makes overlapping releases
//!    impossible, and a pop always lands on whatever card is centered when
//!    it fires.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Rotation while locked | Rapid input | Dropped, returns `false` |
//! | Select out of range | Stale card index | Dropped, returns `false` |
//! | Any input on an empty deck | No cards in markup | Dropped, returns `false` |

use std::time::Duration;

use bitflags::bitflags;
use swiper_core::lock::{AnimationLock, DEFAULT_COOLDOWN};
use swiper_core::timer::TimerQueue;
use swiper_layout::{CardPlacement, LayoutConfig, SelectionStatus, Slot, normalize_index, project};

use crate::card::CardDeck;
use crate::profile::ProfileSnapshot;

/// Delay between a layout pass and the pop marker on the new center.
pub const DEFAULT_POP_DELAY: Duration = Duration::from_millis(60);

/// Carousel tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Cooldown after a rotation (default: 300ms).
    pub cooldown: Duration,
    /// Delay before the pop marker is applied (default: 60ms).
    pub pop_delay: Duration,
    /// Projection tunables.
    pub layout: LayoutConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            pop_delay: DEFAULT_POP_DELAY,
            layout: LayoutConfig::default(),
        }
    }
}

impl CarouselConfig {
    /// Set the rotation cooldown.
    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Set the pop delay.
    #[must_use]
    pub fn with_pop_delay(mut self, delay: Duration) -> Self {
        self.pop_delay = delay;
        self
    }

    /// Set the projection tunables.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

bitflags! {
    /// Presentation classes carried by a card element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CardClasses: u8 {
        /// Centered card.
        const CENTER   = 0b0_0001;
        /// Immediate neighbour.
        const SHRINK   = 0b0_0010;
        /// Everything further away.
        const HIDDEN   = 0b0_0100;
        /// Selected (always alongside `CENTER`).
        const SELECTED = 0b0_1000;
        /// Short-lived emphasis on the center.
        const POP      = 0b1_0000;
    }
}

impl CardClasses {
    /// Classes implied by a layout slot.
    #[must_use]
    pub const fn from_slot(slot: Slot) -> Self {
        match slot {
            Slot::Center => Self::CENTER.union(Self::SELECTED),
            Slot::Shrink => Self::SHRINK,
            Slot::Hidden => Self::HIDDEN,
        }
    }

    /// Class names in a stable order.
    #[must_use]
    pub fn class_list(self) -> Vec<&'static str> {
        [
            (Self::CENTER, "center"),
            (Self::SHRINK, "shrink"),
            (Self::HIDDEN, "hidden"),
            (Self::SELECTED, "selected"),
            (Self::POP, "pop"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

/// One card's visual state after the latest layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    /// Geometry from the projector.
    pub placement: CardPlacement,
    /// Class set.
    pub classes: CardClasses,
}

/// Deferred carousel actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTimer {
    /// Return the animation lock to idle.
    ReleaseLock,
    /// Put the pop marker on the card centered at fire time.
    ApplyPop,
}

/// The carousel state machine.
#[derive(Debug)]
pub struct CarouselController {
    deck: CardDeck,
    config: CarouselConfig,
    center: usize,
    lock: AnimationLock,
    timers: TimerQueue<CarouselTimer>,
    cards: Vec<CardView>,
    status: SelectionStatus,
    layout_passes: u64,
}

impl CarouselController {
    /// Capture `deck` and run the initial layout pass at `now`.
    #[must_use]
    pub fn new(deck: CardDeck, config: CarouselConfig, now: Duration) -> Self {
        let center = deck.initial_center();
        let mut controller = Self {
            deck,
            config,
            center,
            lock: AnimationLock::new(config.cooldown),
            timers: TimerQueue::new(),
            cards: Vec::new(),
            status: SelectionStatus::empty(),
            layout_passes: 0,
        };
        controller.apply_layout(now);
        controller
    }

    /// The captured deck.
    #[must_use]
    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Whether there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Centered index, or `None` for an empty deck.
    #[must_use]
    pub fn center(&self) -> Option<usize> {
        (!self.deck.is_empty()).then_some(self.center)
    }

    /// Whether a rotation is cooling down.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_held()
    }

    /// Per-card visual state from the latest layout pass.
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Derived selection texts from the latest layout pass.
    #[must_use]
    pub fn status(&self) -> &SelectionStatus {
        &self.status
    }

    /// Number of layout passes so far, including the initial one.
    #[must_use]
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Deadline of the next deferred action.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Move one card back. Returns `false` if the input was dropped.
    pub fn rotate_prev(&mut self, now: Duration) -> bool {
        self.rotate(-1, now)
    }

    /// Move one card forward. Returns `false` if the input was dropped.
    pub fn rotate_next(&mut self, now: Duration) -> bool {
        self.rotate(1, now)
    }

    fn rotate(&mut self, step: isize, now: Duration) -> bool {
        let n = self.deck.len();
        if n == 0 {
            return false;
        }
        let Some(release_at) = self.lock.try_engage(now) else {
            swiper_core::trace!(step, "rotation dropped while cooling down");
            return false;
        };
        self.center = normalize_index(self.center as isize + step, n);
        self.apply_layout(now);
        self.timers.schedule(release_at, CarouselTimer::ReleaseLock);
        swiper_core::debug!(center = self.center, n, "rotated");
        true
    }

    /// Bring card `index` to the center without engaging the lock.
    ///
    /// Dropped while a rotation is cooling down or when `index` is out of
    /// range.
    pub fn select_index(&mut self, index: usize, now: Duration) -> bool {
        if self.lock.is_held() || index >= self.deck.len() {
            return false;
        }
        self.center = index;
        self.apply_layout(now);
        swiper_core::debug!(center = self.center, "selected");
        true
    }

    /// Snapshot of the centered card, or `None` for an empty deck.
    #[must_use]
    pub fn view_profile(&self) -> Option<ProfileSnapshot> {
        self.center()
            .and_then(|center| self.deck.get(center))
            .map(|card| card.snapshot())
    }

    /// Fire every deferred action due at `now`. Returns how many fired.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            fired += 1;
            match timer {
                CarouselTimer::ReleaseLock => self.lock.release(),
                CarouselTimer::ApplyPop => self.apply_pop(),
            }
        }
        fired
    }

    fn apply_layout(&mut self, now: Duration) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "carousel_layout",
            center = self.center,
            n = self.deck.len()
        )
        .entered();

        let n = self.deck.len();
        self.center = normalize_index(self.center as isize, n);
        self.cards = project(n, self.center, &self.config.layout)
            .into_iter()
            .map(|placement| CardView {
                placement,
                classes: CardClasses::from_slot(placement.slot),
            })
            .collect();

        self.status = match self.deck.get(self.center) {
            Some(card) => SelectionStatus::derive(Some((self.center, card.display_name())), n),
            None => SelectionStatus::empty(),
        };

        self.layout_passes += 1;
        if n > 0 {
            self.timers
                .schedule_after(now, self.config.pop_delay, CarouselTimer::ApplyPop);
        }
    }

    fn apply_pop(&mut self) {
        for card in &mut self.cards {
            card.classes.remove(CardClasses::POP);
        }
        if let Some(card) = self.cards.get_mut(self.center) {
            card.classes.insert(CardClasses::POP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn deck(n: usize) -> CardDeck {
        CardDeck::new((0..n).map(|i| Card::new().data_name(format!("Siswa {i}"))))
    }

    fn controller(n: usize) -> CarouselController {
        CarouselController::new(deck(n), CarouselConfig::default(), Duration::ZERO)
    }

    fn centers(c: &CarouselController) -> usize {
        c.cards()
            .iter()
            .filter(|v| v.classes.contains(CardClasses::CENTER))
            .count()
    }

    #[test]
    fn initial_layout_centers_middle() {
        let c = controller(5);
        assert_eq!(c.center(), Some(2));
        assert_eq!(c.layout_passes(), 1);
        assert_eq!(centers(&c), 1);
        assert_eq!(c.status().position.as_deref(), Some("3 / 5"));
    }

    #[test]
    fn rotate_next_then_prev_scenario() {
        let mut c = controller(5);
        assert!(c.rotate_next(ms(0)));
        assert_eq!(c.center(), Some(3));
        assert_eq!(c.status().position.as_deref(), Some("4 / 5"));

        c.advance(ms(300));
        assert!(c.rotate_prev(ms(300)));
        c.advance(ms(600));
        assert!(c.rotate_prev(ms(600)));
        assert_eq!(c.center(), Some(1));
        assert_eq!(c.status().position.as_deref(), Some("2 / 5"));
    }

    #[test]
    fn second_rotation_inside_cooldown_is_dropped() {
        let mut c = controller(5);
        assert!(c.rotate_next(ms(0)));
        assert!(!c.rotate_next(ms(100)));
        assert_eq!(c.center(), Some(3));

        c.advance(ms(299));
        assert!(c.is_locked());
        c.advance(ms(300));
        assert!(!c.is_locked());
        assert!(c.rotate_next(ms(300)));
        assert_eq!(c.center(), Some(4));
    }

    #[test]
    fn rotation_wraps_both_ways() {
        let mut c = CarouselController::new(
            CardDeck::new([Card::new().centered(true), Card::new(), Card::new()]),
            CarouselConfig::default(),
            Duration::ZERO,
        );
        assert!(c.rotate_prev(ms(0)));
        assert_eq!(c.center(), Some(2));
        c.advance(ms(300));
        assert!(c.rotate_next(ms(300)));
        assert_eq!(c.center(), Some(0));
    }

    #[test]
    fn empty_deck_absorbs_everything() {
        let mut c = controller(0);
        assert_eq!(c.center(), None);
        assert!(!c.rotate_next(ms(0)));
        assert!(!c.rotate_prev(ms(0)));
        assert!(!c.select_index(0, ms(0)));
        assert!(!c.is_locked());
        assert!(c.view_profile().is_none());
        assert!(c.cards().is_empty());
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.status(), &SelectionStatus::empty());
    }

    #[test]
    fn single_card_rotation_keeps_index() {
        let mut c = controller(1);
        assert!(c.rotate_next(ms(0)));
        assert_eq!(c.center(), Some(0));
        assert!(c.is_locked());
        assert_eq!(c.status().position.as_deref(), Some("1 / 1"));
    }

    #[test]
    fn select_bypasses_cooldown_but_respects_lock() {
        let mut c = controller(5);
        assert!(c.select_index(4, ms(0)));
        assert!(!c.is_locked());
        assert!(c.select_index(0, ms(1)));
        assert_eq!(c.center(), Some(0));

        c.rotate_next(ms(2));
        assert!(!c.select_index(3, ms(10)));
        assert_eq!(c.center(), Some(1));
    }

    #[test]
    fn select_out_of_range_is_dropped() {
        let mut c = controller(3);
        assert!(!c.select_index(3, ms(0)));
        assert_eq!(c.center(), Some(1));
    }

    #[test]
    fn select_current_center_is_idempotent() {
        let mut c = controller(5);
        let before: Vec<_> = c.cards().iter().map(|v| v.placement).collect();
        let status = c.status().clone();
        assert!(c.select_index(2, ms(0)));
        let after: Vec<_> = c.cards().iter().map(|v| v.placement).collect();
        assert_eq!(before, after);
        assert_eq!(&status, c.status());
        assert_eq!(c.center(), Some(2));
    }

    #[test]
    fn pop_lands_after_delay_on_current_center() {
        let mut c = controller(5);
        assert!(!c.cards()[2].classes.contains(CardClasses::POP));
        c.advance(ms(59));
        assert!(!c.cards()[2].classes.contains(CardClasses::POP));
        c.advance(ms(60));
        assert!(c.cards()[2].classes.contains(CardClasses::POP));

        c.rotate_next(ms(100));
        assert!(c.cards().iter().all(|v| !v.classes.contains(CardClasses::POP)));
        c.advance(ms(160));
        assert!(c.cards()[3].classes.contains(CardClasses::POP));
        assert_eq!(
            c.cards()
                .iter()
                .filter(|v| v.classes.contains(CardClasses::POP))
                .count(),
            1
        );
    }

    #[test]
    fn stale_pop_follows_later_selection() {
        let mut c = controller(5);
        c.select_index(0, ms(10));
        c.select_index(4, ms(20));
        c.advance(ms(1_000));
        assert!(c.cards()[4].classes.contains(CardClasses::POP));
        assert!(!c.cards()[0].classes.contains(CardClasses::POP));
    }

    #[test]
    fn view_profile_reads_center() {
        let mut c = controller(3);
        c.select_index(0, ms(0));
        let snap = c.view_profile().unwrap();
        assert_eq!(snap.name, "Siswa 0");
        assert_eq!(c.center(), Some(0));
    }

    #[test]
    fn class_list_order() {
        let classes = CardClasses::from_slot(Slot::Center) | CardClasses::POP;
        assert_eq!(classes.class_list(), vec!["center", "selected", "pop"]);
        assert_eq!(CardClasses::from_slot(Slot::Hidden).class_list(), vec!["hidden"]);
    }

    #[test]
    fn custom_cooldown_applies() {
        let mut c = CarouselController::new(
            deck(4),
            CarouselConfig::default().with_cooldown(ms(50)),
            Duration::ZERO,
        );
        c.rotate_next(ms(0));
        c.advance(ms(50));
        assert!(c.rotate_next(ms(50)));
    }
}
