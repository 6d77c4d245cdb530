#![forbid(unsafe_code)]

//! Scroll-triggered reveal and the hero entrance.
//!
//! Each registered element runs a one-shot machine:
//!
//! ```text
//!   Observing ──(visible ratio ≥ threshold)──▶ Revealed   (terminal)
//! ```
//!
//! Visibility is measured against the viewport with its bottom edge pulled
//! up by [`RevealConfig::bottom_margin`], so elements reveal slightly after
//! they enter from below. Once revealed an element is no longer observed and
//! further entries for it are ignored.

use std::collections::HashMap;
use std::time::Duration;

use swiper_core::geometry::Rect;

/// Delay before the hero copy animates in.
pub const DEFAULT_HERO_DELAY: Duration = Duration::from_millis(120);

/// Reveal tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Minimum visible fraction of the element (default: 0.08).
    pub threshold: f64,
    /// Fraction of the viewport height excluded at the bottom (default: 0.08).
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.08,
            bottom_margin: 0.08,
        }
    }
}

impl RevealConfig {
    /// Set the visibility threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the bottom viewport margin.
    #[must_use]
    pub fn with_bottom_margin(mut self, fraction: f64) -> Self {
        self.bottom_margin = fraction;
        self
    }
}

/// Per-element reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Carries `reveal-on-scroll`; waiting to become visible.
    Observing,
    /// Carries `is-visible` and `--delay: 0ms`; no longer observed.
    Revealed,
}

/// Geometry of one element at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Element bounds in viewport coordinates.
    pub bounds: Rect,
    /// Viewport bounds.
    pub viewport: Rect,
}

impl IntersectionEntry {
    /// Fraction of the element inside the (margin-adjusted) root.
    ///
    /// Zero-area elements count as fully visible when their origin is inside
    /// the root.
    #[must_use]
    pub fn visible_ratio(&self, config: &RevealConfig) -> f64 {
        let root = self.viewport.shrink_bottom(config.bottom_margin);
        if self.bounds.is_empty() {
            return if root.contains(self.bounds.x, self.bounds.y) {
                1.0
            } else {
                0.0
            };
        }
        self.bounds
            .intersection(&root)
            .map_or(0.0, |overlap| overlap.area() / self.bounds.area())
    }
}

/// Tracks reveal state for a set of elements.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    config: RevealConfig,
    order: Vec<String>,
    states: HashMap<String, RevealState>,
}

impl RevealTracker {
    /// Create a tracker with the given configuration.
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            order: Vec::new(),
            states: HashMap::new(),
        }
    }

    /// Start observing `id`. Registering twice is a no-op.
    pub fn register(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.states.contains_key(&id) {
            return;
        }
        self.states.insert(id.clone(), RevealState::Observing);
        self.order.push(id);
    }

    /// Feed one intersection entry. Returns `true` if `id` was revealed by it.
    pub fn observe(&mut self, id: &str, entry: &IntersectionEntry) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        if *state == RevealState::Revealed {
            return false;
        }
        let ratio = entry.visible_ratio(&self.config);
        if ratio > 0.0 && ratio >= self.config.threshold {
            *state = RevealState::Revealed;
            swiper_core::trace!(id, ratio, "element revealed");
            return true;
        }
        false
    }

    /// State of `id`, if registered.
    #[must_use]
    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.states.get(id).copied()
    }

    /// Registered ids with their state, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RevealState)> {
        self.order
            .iter()
            .filter_map(|id| self.states.get(id).map(|state| (id.as_str(), *state)))
    }

    /// Number of elements still observed.
    #[must_use]
    pub fn observing(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == RevealState::Observing)
            .count()
    }
}

/// Hero entrance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroState {
    /// Waiting for the entrance delay.
    #[default]
    Waiting,
    /// Carries `animate`.
    Animated,
}

/// The hero copy's one-shot entrance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroEntrance {
    state: HeroState,
    delay: Duration,
}

impl HeroEntrance {
    /// Create a waiting entrance with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            state: HeroState::Waiting,
            delay,
        }
    }

    /// Deadline for the entrance when the page starts at `now`.
    #[must_use]
    pub fn deadline(&self, now: Duration) -> Duration {
        now.saturating_add(self.delay)
    }

    /// Apply the `animate` marker. Idempotent.
    pub fn animate(&mut self) {
        self.state = HeroState::Animated;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> HeroState {
        self.state
    }
}
