#![forbid(unsafe_code)]

//! Profile panel.
//!
//! The panel shows a copy of one card's fields. Opening it takes a
//! [`ProfileSnapshot`]; nothing ties the panel back to the carousel, so later
//! rotations leave an open panel untouched. Closing keeps the last snapshot
//! (the markup keeps its text while hidden) until the next open replaces it.

/// Detached copy of a card's display fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    /// Resolved display name.
    pub name: String,
    /// Email, empty when the card has none.
    pub email: String,
    /// Biography, empty when the card has none.
    pub bio: String,
    /// Avatar image source.
    pub avatar: Option<String>,
}

impl ProfileSnapshot {
    /// CSS `background-image` value for the avatar slot.
    #[must_use]
    pub fn avatar_style(&self) -> String {
        match &self.avatar {
            Some(src) => format!("url({src})"),
            None => "none".to_string(),
        }
    }
}

/// Visibility of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Hidden (`visually-hidden`, no `open`).
    #[default]
    Closed,
    /// Shown (`open`).
    Open,
}

/// The profile detail panel.
#[derive(Debug, Clone, Default)]
pub struct ProfilePanel {
    state: PanelState,
    snapshot: Option<ProfileSnapshot>,
}

impl ProfilePanel {
    /// Create a closed, empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `snapshot`, replacing whatever was shown before.
    pub fn open(&mut self, snapshot: ProfileSnapshot) {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %snapshot.name, "profile panel opened");
        self.snapshot = Some(snapshot);
        self.state = PanelState::Open;
    }

    /// Hide the panel. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = PanelState::Closed;
        was_open
    }

    /// Current visibility.
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether the panel is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Most recent snapshot, kept across close.
    #[must_use]
    pub fn snapshot(&self) -> Option<&ProfileSnapshot> {
        self.snapshot.as_ref()
    }
}
