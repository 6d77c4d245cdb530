#![forbid(unsafe_code)]

//! Button ripple effect.
//!
//! A click on a button spawns a square ripple centered on the click point,
//! sized from the button's larger side. Each ripple is removed a fixed
//! lifetime after it was spawned; ripples never affect each other.

use std::time::Duration;

use swiper_core::geometry::Rect;
use swiper_core::timer::TimerQueue;

/// Ripple tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleConfig {
    /// Ripple side as a multiple of the button's larger side (default: 1.2).
    pub size_factor: f64,
    /// Time until the ripple is removed (default: 700ms).
    pub lifetime: Duration,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            size_factor: 1.2,
            lifetime: Duration::from_millis(700),
        }
    }
}

/// One ripple, positioned relative to its button.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    /// Unique id within the layer.
    pub id: u64,
    /// Id of the button element hosting the ripple.
    pub button: String,
    /// Width and height in pixels.
    pub size: f64,
    /// Left offset inside the button.
    pub left: f64,
    /// Top offset inside the button.
    pub top: f64,
}

impl Ripple {
    /// Geometry for a click at (`x`, `y`) on a button with `bounds`.
    ///
    /// Returns `(size, left, top)`.
    #[must_use]
    pub fn geometry(bounds: &Rect, x: f64, y: f64, size_factor: f64) -> (f64, f64, f64) {
        let size = bounds.width.max(bounds.height) * size_factor;
        let left = x - bounds.x - size / 2.0;
        let top = y - bounds.y - size / 2.0;
        (size, left, top)
    }
}

/// Live ripples across all buttons.
#[derive(Debug, Default)]
pub struct RippleLayer {
    config: RippleConfig,
    live: Vec<Ripple>,
    expiry: TimerQueue<u64>,
    next_id: u64,
}

impl RippleLayer {
    /// Create an empty layer.
    #[must_use]
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config,
            live: Vec::new(),
            expiry: TimerQueue::new(),
            next_id: 0,
        }
    }

    /// Spawn a ripple for a click at (`x`, `y`) on `button` at `now`.
    pub fn spawn(
        &mut self,
        button: impl Into<String>,
        bounds: &Rect,
        x: f64,
        y: f64,
        now: Duration,
    ) -> &Ripple {
        let (size, left, top) = Ripple::geometry(bounds, x, y, self.config.size_factor);
        let id = self.next_id;
        self.next_id += 1;
        self.expiry.schedule_after(now, self.config.lifetime, id);
        self.live.push(Ripple {
            id,
            button: button.into(),
            size,
            left,
            top,
        });
        &self.live[self.live.len() - 1]
    }

    /// Remove ripples whose lifetime ended by `now`. Returns how many.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut removed = 0;
        while let Some(id) = self.expiry.pop_due(now) {
            self.live.retain(|ripple| ripple.id != id);
            removed += 1;
        }
        removed
    }

    /// Ripples currently shown, oldest first.
    #[must_use]
    pub fn live(&self) -> &[Ripple] {
        &self.live
    }

    /// Deadline of the next removal.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.expiry.next_deadline()
    }
}
