#![forbid(unsafe_code)]

//! Rotation cooldown as an explicit two-state machine.
//!
//! ```text
//!            try_engage (Idle)
//!   Idle ─────────────────────────▶ CoolingDown
//!    ▲                                   │
//!    └────────── release (timer) ────────┘
//! ```
//!
//! The lock never polls the clock. [`AnimationLock::try_engage`] returns the
//! release deadline and the owner schedules the release on its own timer
//! queue; until that timer fires every further engage attempt is refused.

use std::time::Duration;

/// Default cooldown after a rotation.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(300);

/// Lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// No rotation in flight; input is accepted.
    Idle,
    /// A rotation started at `since`; input is dropped until released.
    CoolingDown {
        /// Time the lock was engaged.
        since: Duration,
    },
}

/// Guard that drops rotations issued during the cooldown window.
#[derive(Debug, Clone)]
pub struct AnimationLock {
    state: LockState,
    cooldown: Duration,
}

impl Default for AnimationLock {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl AnimationLock {
    /// Create an idle lock with the given cooldown.
    #[must_use]
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            state: LockState::Idle,
            cooldown,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> LockState {
        self.state
    }

    /// Configured cooldown.
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Whether a rotation is cooling down.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        matches!(self.state, LockState::CoolingDown { .. })
    }

    /// Engage the lock at `now`.
    ///
    /// Returns the deadline at which the owner must call
    /// [`release`](Self::release), or `None` if the lock is already held.
    pub fn try_engage(&mut self, now: Duration) -> Option<Duration> {
        if self.is_held() {
            return None;
        }
        self.state = LockState::CoolingDown { since: now };
        Some(now.saturating_add(self.cooldown))
    }

    /// Return to [`LockState::Idle`]. Idempotent.
    pub fn release(&mut self) {
        self.state = LockState::Idle;
    }
}
