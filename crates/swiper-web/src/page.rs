#![forbid(unsafe_code)]

//! Host-driven page runtime.
//!
//! [`PageHost`] wires every page behavior against a [`Markup`] description
//! and runs without threads or blocking. The host controls the loop:
//!
//! 1. Push events via [`PageHost::push_event`].
//! 2. Advance time via [`PageHost::advance_time`].
//! 3. Call [`PageHost::step`] to fire due timers and process queued events.
//! 4. Paint from [`PageHost::surface`] and drain
//!    [`PageHost::take_scroll_requests`].
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use swiper_core::event::{KeyCode, KeyEvent};
//! use swiper_web::markup::Markup;
//! use swiper_web::page::{PageConfig, PageEvent, PageHost};
//!
//! let markup = Markup::from_json(r#"{
//!     "studentList": { "cards": [ {"name": "A"}, {"name": "B"}, {"name": "C"} ] },
//!     "prevButton": true,
//!     "nextButton": true,
//!     "selectedInfo": true
//! }"#).unwrap();
//! let mut host = PageHost::new(&markup, PageConfig::default());
//!
//! host.push_event(PageEvent::Key(KeyEvent::new(KeyCode::Right)));
//! host.step();
//! let surface = host.surface();
//! let carousel = surface.carousel.unwrap();
//! assert_eq!(carousel.selected_info.as_deref(), Some("Terpilih: C"));
//! ```
//!
//! # Wiring
//!
//! | Feature        | Requires                                      |
//! |----------------|-----------------------------------------------|
//! | Carousel       | card list, prev button, next button           |
//! | Profile view   | carousel, view-profile button                 |
//! | Profile close  | profile view, close button in the panel       |
//! | Nav toggle     | toggle button, nav                            |
//! | Anchor scroll  | always (nav closes only if wired)             |
//! | Hero entrance  | hero copy                                     |
//! | Ripple         | button listed in `buttons`                    |
//!
//! A feature whose anchors are missing ignores its events.

use core::time::Duration;
use std::collections::{BTreeSet, VecDeque};

use swiper_core::event::{KeyEvent, PointerEvent};
use swiper_core::geometry::Rect;
use swiper_core::gesture::SwipeConfig;
use swiper_widgets::carousel::CarouselConfig;
use swiper_widgets::dispatch::{CarouselInput, CarouselTarget};
use swiper_widgets::nav::{AnchorNavigator, NavToggle, ScrollRequest};
use swiper_widgets::reveal::{
    DEFAULT_HERO_DELAY, HeroEntrance, HeroState, IntersectionEntry, RevealConfig, RevealState,
    RevealTracker,
};
use swiper_widgets::ripple::{RippleConfig, RippleLayer};
use swiper_widgets::StudentSwiper;

use crate::DeterministicClock;
use crate::markup::{Markup, ProfilePanelMarkup};
use crate::surface::{
    CardSurface, CarouselSurface, IndicatorSurface, NavSurface, PageSurface, ProfileSurface,
    RevealSurface, RippleSurface, ScrollSurface,
};

/// Page tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Carousel timing and layout.
    pub carousel: CarouselConfig,
    /// Swipe threshold.
    pub swipe: SwipeConfig,
    /// Reveal-on-scroll tuning.
    pub reveal: RevealConfig,
    /// Ripple tuning.
    pub ripple: RippleConfig,
    /// Delay before the hero copy animates (default: 120ms).
    pub hero_delay: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            swipe: SwipeConfig::default(),
            reveal: RevealConfig::default(),
            ripple: RippleConfig::default(),
            hero_delay: DEFAULT_HERO_DELAY,
        }
    }
}

impl PageConfig {
    /// Set the carousel configuration.
    #[must_use]
    pub fn with_carousel(mut self, carousel: CarouselConfig) -> Self {
        self.carousel = carousel;
        self
    }

    /// Set the swipe configuration.
    #[must_use]
    pub fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    /// Set the reveal configuration.
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    /// Set the ripple configuration.
    #[must_use]
    pub fn with_ripple(mut self, ripple: RippleConfig) -> Self {
        self.ripple = ripple;
        self
    }

    /// Set the hero entrance delay.
    #[must_use]
    pub fn with_hero_delay(mut self, delay: Duration) -> Self {
        self.hero_delay = delay;
        self
    }
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// `#nav-toggle`.
    NavToggle,
    /// An `a[href]`; only `#id` hrefs are handled.
    Link {
        /// Raw `href` attribute.
        href: String,
    },
    /// A carousel control or card.
    Carousel(CarouselTarget),
    /// Anything else.
    Other,
}

/// A `.btn` element hit by a click.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonHit {
    /// Button id.
    pub id: String,
    /// Button bounds in client coordinates.
    pub bounds: Rect,
}

/// One click in client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    /// Semantic target.
    pub target: ClickTarget,
    /// Client x.
    pub x: f64,
    /// Client y.
    pub y: f64,
    /// The `.btn` the click landed inside, if any.
    pub button: Option<ButtonHit>,
}

impl ClickEvent {
    /// Click on `target` at the origin, outside any button.
    #[must_use]
    pub fn on(target: ClickTarget) -> Self {
        Self {
            target,
            x: 0.0,
            y: 0.0,
            button: None,
        }
    }

    /// Set the click position.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Mark the click as landing inside button `id`.
    #[must_use]
    pub fn in_button(mut self, id: impl Into<String>, bounds: Rect) -> Self {
        self.button = Some(ButtonHit {
            id: id.into(),
            bounds,
        });
        self
    }
}

/// Input pushed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Document-level keydown.
    Key(KeyEvent),
    /// Pointer activity on the card list.
    ListPointer(PointerEvent),
    /// A click.
    Click(ClickEvent),
    /// Intersection update for a reveal element.
    Intersection {
        /// Element id.
        id: String,
        /// Geometry at the current scroll position.
        entry: IntersectionEntry,
    },
}

/// Result of a single [`PageHost::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Number of events processed during this step.
    pub events_processed: u32,
    /// Number of timers fired during this step.
    pub timers_fired: u32,
    /// Whether the surface may have changed.
    pub changed: bool,
    /// Current step index (monotonically increasing).
    pub step_idx: u64,
}

#[derive(Debug, Clone, Copy)]
struct Wiring {
    profile_view: bool,
    profile_close: bool,
    selected_info: bool,
    position_indicator: bool,
}

/// The page runtime.
#[derive(Debug)]
pub struct PageHost {
    clock: DeterministicClock,
    events: VecDeque<PageEvent>,
    wiring: Wiring,
    profile_slots: Option<ProfilePanelMarkup>,
    swiper: Option<StudentSwiper>,
    nav: Option<NavToggle>,
    anchors: AnchorNavigator,
    hero: Option<(HeroEntrance, Duration)>,
    reveal: RevealTracker,
    ripples: RippleLayer,
    buttons: BTreeSet<String>,
    scroll_requests: Vec<ScrollRequest>,
    step_idx: u64,
}

impl PageHost {
    /// Wire the page at time zero.
    #[must_use]
    pub fn new(markup: &Markup, config: PageConfig) -> Self {
        let clock = DeterministicClock::new();
        let now = clock.now();

        let swiper = markup.carousel_wired().then(|| {
            StudentSwiper::with_swipe(markup.deck(), config.carousel, config.swipe, now)
        });
        let profile_view = swiper.is_some() && markup.view_profile_button;
        let profile_close = profile_view
            && markup
                .profile_panel
                .as_ref()
                .is_some_and(|panel| panel.close_button);

        let mut reveal = RevealTracker::new(config.reveal);
        for id in &markup.reveal_elements {
            reveal.register(id.clone());
        }

        let hero = markup.hero_copy.then(|| {
            let entrance = HeroEntrance::new(config.hero_delay);
            let due = entrance.deadline(now);
            (entrance, due)
        });

        swiper_core::info!(
            carousel = swiper.is_some(),
            nav = markup.nav_wired(),
            reveal = markup.reveal_elements.len(),
            "page wired"
        );

        Self {
            clock,
            events: VecDeque::new(),
            wiring: Wiring {
                profile_view,
                profile_close,
                selected_info: markup.selected_info,
                position_indicator: markup.position_indicator,
            },
            profile_slots: markup.profile_panel.clone(),
            swiper,
            nav: markup.nav_wired().then(NavToggle::new),
            anchors: AnchorNavigator::new(markup.element_ids.iter().cloned()),
            hero,
            reveal,
            ripples: RippleLayer::new(config.ripple),
            buttons: markup.buttons.iter().cloned().collect(),
            scroll_requests: Vec::new(),
            step_idx: 0,
        }
    }

    /// Queue an event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: PageEvent) {
        self.events.push_back(event);
    }

    /// Advance the deterministic clock by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Set the deterministic clock to an absolute time.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Fire timers due at the current time, then process queued events in
    /// order.
    pub fn step(&mut self) -> StepResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("page_step", step_idx = self.step_idx).entered();

        let now = self.clock.now();
        let timers_fired = self.fire_timers(now);

        let mut events_processed: u32 = 0;
        let mut changed = timers_fired > 0;
        while let Some(event) = self.events.pop_front() {
            events_processed += 1;
            changed |= self.handle_event(event, now);
        }

        self.step_idx += 1;
        StepResult {
            events_processed,
            timers_fired,
            changed,
            step_idx: self.step_idx,
        }
    }

    /// Earliest pending timer deadline across all features.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let hero = self
            .hero
            .filter(|(entrance, _)| entrance.state() == HeroState::Waiting)
            .map(|(_, due)| due);
        [
            self.swiper.as_ref().and_then(StudentSwiper::next_deadline),
            self.ripples.next_deadline(),
            hero,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// The swiper, when the carousel is wired.
    #[must_use]
    pub fn swiper(&self) -> Option<&StudentSwiper> {
        self.swiper.as_ref()
    }

    /// Drain pending scroll requests.
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    /// Snapshot of the visual state.
    #[must_use]
    pub fn surface(&self) -> PageSurface {
        PageSurface {
            carousel: self.swiper.as_ref().map(|swiper| self.carousel_surface(swiper)),
            nav: self.nav.map(|nav| NavSurface {
                open: nav.is_open(),
                aria_expanded: nav.aria_expanded(),
            }),
            hero_animated: self
                .hero
                .map(|(entrance, _)| entrance.state() == HeroState::Animated),
            reveal: self
                .reveal
                .iter()
                .map(|(id, state)| RevealSurface {
                    id: id.to_string(),
                    classes: match state {
                        RevealState::Observing => vec!["reveal-on-scroll"],
                        RevealState::Revealed => vec!["reveal-on-scroll", "is-visible"],
                    },
                    delay: (state == RevealState::Revealed).then_some("0ms"),
                })
                .collect(),
            ripples: self
                .ripples
                .live()
                .iter()
                .map(|ripple| RippleSurface {
                    id: ripple.id,
                    button: ripple.button.clone(),
                    size: ripple.size,
                    left: ripple.left,
                    top: ripple.top,
                })
                .collect(),
            scroll_requests: self
                .scroll_requests
                .iter()
                .map(|req| ScrollSurface {
                    target: req.target.clone(),
                    behavior: if req.smooth { "smooth" } else { "auto" },
                    block: "start",
                })
                .collect(),
        }
    }

    /// Current step index.
    #[must_use]
    pub fn step_idx(&self) -> u64 {
        self.step_idx
    }

    fn fire_timers(&mut self, now: Duration) -> u32 {
        let mut fired = 0;
        if let Some(swiper) = &mut self.swiper {
            fired += swiper.advance(now);
        }
        fired += self.ripples.advance(now);
        if let Some((entrance, due)) = &mut self.hero
            && entrance.state() == HeroState::Waiting
            && now >= *due
        {
            entrance.animate();
            swiper_core::debug!("hero entrance");
            fired += 1;
        }
        u32::try_from(fired).unwrap_or(u32::MAX)
    }

    fn handle_event(&mut self, event: PageEvent, now: Duration) -> bool {
        match event {
            PageEvent::Key(key) => self.carousel_input(&CarouselInput::Key(key), now),
            PageEvent::ListPointer(pointer) => {
                self.carousel_input(&CarouselInput::Pointer(pointer), now)
            }
            PageEvent::Click(click) => self.handle_click(click, now),
            PageEvent::Intersection { id, entry } => self.reveal.observe(&id, &entry),
        }
    }

    fn handle_click(&mut self, click: ClickEvent, now: Duration) -> bool {
        let mut changed = false;
        if let Some(hit) = &click.button
            && self.buttons.contains(&hit.id)
        {
            self.ripples
                .spawn(hit.id.clone(), &hit.bounds, click.x, click.y, now);
            changed = true;
        }
        changed |= match click.target {
            ClickTarget::NavToggle => match &mut self.nav {
                Some(nav) => {
                    nav.toggle();
                    swiper_core::debug!(open = nav.is_open(), "nav toggled");
                    true
                }
                None => false,
            },
            ClickTarget::Link { href } => {
                match self.anchors.follow(&href, self.nav.as_mut()) {
                    Some(request) => {
                        self.scroll_requests.push(request);
                        true
                    }
                    None => false,
                }
            }
            ClickTarget::Carousel(target) => {
                let wired = match target {
                    CarouselTarget::ViewProfileButton => self.wiring.profile_view,
                    CarouselTarget::CloseProfileButton => self.wiring.profile_close,
                    CarouselTarget::PrevButton
                    | CarouselTarget::NextButton
                    | CarouselTarget::Card(_) => true,
                };
                wired && self.carousel_input(&CarouselInput::Click(target), now)
            }
            ClickTarget::Other => false,
        };
        changed
    }

    fn carousel_input(&mut self, input: &CarouselInput, now: Duration) -> bool {
        self.swiper
            .as_mut()
            .and_then(|swiper| swiper.handle(input, now))
            .is_some()
    }

    fn carousel_surface(&self, swiper: &StudentSwiper) -> CarouselSurface {
        let controller = swiper.controller();
        let status = controller.status();
        let panel = swiper.panel();
        let snapshot = panel.snapshot();
        let slots = self.profile_slots.as_ref();
        let slot = |present: bool, value: Option<String>| if present { value } else { None };

        CarouselSurface {
            cards: controller
                .cards()
                .iter()
                .map(|view| CardSurface {
                    index: view.placement.index,
                    classes: view.classes.class_list(),
                    transform: view.placement.transform(),
                    z_index: view.placement.z_index,
                })
                .collect(),
            selected_info: self
                .wiring
                .selected_info
                .then(|| status.selected_info.clone()),
            position_indicator: self.wiring.position_indicator.then(|| IndicatorSurface {
                text: status.position.clone(),
                hidden: status.position.is_none(),
            }),
            view_profile_hidden: self
                .wiring
                .profile_view
                .then_some(!status.profile_available),
            profile: slots.map(|slots| ProfileSurface {
                open: panel.is_open(),
                hidden: !panel.is_open(),
                name: slot(slots.name, snapshot.map(|s| s.name.clone())),
                email: slot(slots.email, snapshot.map(|s| s.email.clone())),
                bio: slot(slots.bio, snapshot.map(|s| s.bio.clone())),
                avatar_background: slot(slots.avatar, snapshot.map(|s| s.avatar_style())),
            }),
        }
    }
}
