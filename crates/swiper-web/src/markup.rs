#![forbid(unsafe_code)]

//! Markup contract.
//!
//! The host scans the document once at `DOMContentLoaded` and describes
//! which anchors exist as JSON. Every field is optional: a missing anchor
//! disables the feature that needs it and nothing else.
//!
//! ```
//! use swiper_web::markup::Markup;
//!
//! let markup = Markup::from_json(r#"{
//!     "studentList": { "cards": [ { "name": "Ani" }, { "nameText": "Budi", "centered": true } ] },
//!     "prevButton": true,
//!     "nextButton": true
//! }"#).unwrap();
//! assert!(markup.carousel_wired());
//! assert_eq!(markup.deck().initial_center(), 1);
//! ```

use serde::{Deserialize, Serialize};
use swiper_widgets::card::{Card, CardDeck};

/// Markup ingest error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The JSON could not be parsed into a [`Markup`].
    Json {
        /// Parser message.
        message: String,
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
    },
}

impl core::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json {
                message,
                line,
                column,
            } => write!(f, "invalid markup json at {line}:{column}: {message}"),
        }
    }
}

impl std::error::Error for MarkupError {}

impl From<serde_json::Error> for MarkupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// One `.student-card` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardMarkup {
    /// `data-name`.
    pub name: Option<String>,
    /// Text of the nested `.name` element.
    pub name_text: Option<String>,
    /// `data-email`.
    pub email: Option<String>,
    /// `data-bio`.
    pub bio: Option<String>,
    /// `src` of the nested `img`.
    pub avatar: Option<String>,
    /// Whether the card carries the `center` class.
    pub centered: bool,
}

impl CardMarkup {
    fn to_card(&self) -> Card {
        Card::from_parts(
            self.name.clone(),
            self.name_text.clone(),
            self.email.clone(),
            self.bio.clone(),
            self.avatar.clone(),
            self.centered,
        )
    }
}

/// The `.student-list` container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentListMarkup {
    /// Cards in document order.
    pub cards: Vec<CardMarkup>,
}

fn present() -> bool {
    true
}

/// The `#student-profile` panel and its slots.
///
/// Slots are only described inside the panel: a markup without
/// `profilePanel` has no name, email, bio or avatar slots either, even if the
/// document carries those ids elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePanelMarkup {
    /// `#profile-name`.
    #[serde(default = "present")]
    pub name: bool,
    /// `#profile-email`.
    #[serde(default = "present")]
    pub email: bool,
    /// `#profile-bio`.
    #[serde(default = "present")]
    pub bio: bool,
    /// `.profile-avatar`.
    #[serde(default = "present")]
    pub avatar: bool,
    /// `#close-profile`.
    #[serde(default = "present")]
    pub close_button: bool,
}

impl Default for ProfilePanelMarkup {
    fn default() -> Self {
        Self {
            name: true,
            email: true,
            bio: true,
            avatar: true,
            close_button: true,
        }
    }
}

/// Anchors found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Markup {
    /// `.student-list` and its cards.
    pub student_list: Option<StudentListMarkup>,
    /// `.prev-btn`.
    pub prev_button: bool,
    /// `.next-btn`.
    pub next_button: bool,
    /// `#view-profile-btn`.
    pub view_profile_button: bool,
    /// `#selected-info`.
    pub selected_info: bool,
    /// `#position-indicator`.
    pub position_indicator: bool,
    /// `#student-profile` with its slots. `None` also disables the slots.
    pub profile_panel: Option<ProfilePanelMarkup>,
    /// `#nav-toggle`.
    pub nav_toggle: bool,
    /// `#main-nav`.
    pub nav: bool,
    /// Ids that internal `#id` links may target.
    pub element_ids: Vec<String>,
    /// `.hero-copy`.
    pub hero_copy: bool,
    /// Ids of elements revealed on scroll.
    pub reveal_elements: Vec<String>,
    /// Ids of `.btn` elements that ripple on click.
    pub buttons: Vec<String>,
}

impl Markup {
    /// Parse the host's JSON description.
    pub fn from_json(json: &str) -> Result<Self, MarkupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the carousel has the anchors it needs: the card list and
    /// both navigation buttons.
    #[must_use]
    pub fn carousel_wired(&self) -> bool {
        self.student_list.is_some() && self.prev_button && self.next_button
    }

    /// Whether the nav toggle has both of its anchors.
    #[must_use]
    pub fn nav_wired(&self) -> bool {
        self.nav_toggle && self.nav
    }

    /// Capture the card deck (empty without a card list).
    #[must_use]
    pub fn deck(&self) -> CardDeck {
        self.student_list
            .as_ref()
            .map(|list| CardDeck::new(list.cards.iter().map(CardMarkup::to_card)))
            .unwrap_or_default()
    }
}
