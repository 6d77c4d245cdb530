#![forbid(unsafe_code)]

//! Serializable visual state.
//!
//! A [`PageSurface`] is everything the host needs to paint the page after a
//! step: class lists, inline styles and texts. Sections for features whose
//! anchors are missing are `None` and serialize as `null`.

use serde::Serialize;

/// Full page state after the latest step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSurface {
    /// Carousel and profile panel.
    pub carousel: Option<CarouselSurface>,
    /// Main navigation.
    pub nav: Option<NavSurface>,
    /// Whether the hero copy carries `animate`.
    pub hero_animated: Option<bool>,
    /// Reveal-on-scroll elements in registration order.
    pub reveal: Vec<RevealSurface>,
    /// Live ripples, oldest first.
    pub ripples: Vec<RippleSurface>,
    /// Scroll requests not yet taken by the host.
    pub scroll_requests: Vec<ScrollSurface>,
}

impl PageSurface {
    /// Serialize to JSON for the JS bridge.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Carousel widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSurface {
    /// One entry per card in document order.
    pub cards: Vec<CardSurface>,
    /// Text of `#selected-info`, if present.
    pub selected_info: Option<String>,
    /// `#position-indicator`, if present.
    pub position_indicator: Option<IndicatorSurface>,
    /// Whether `#view-profile-btn` carries `visually-hidden`, if present.
    pub view_profile_hidden: Option<bool>,
    /// `#student-profile`, if present.
    pub profile: Option<ProfileSurface>,
}

/// One card element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSurface {
    /// Document index.
    pub index: usize,
    /// Class names managed by the carousel.
    pub classes: Vec<&'static str>,
    /// Inline `transform`.
    pub transform: String,
    /// Inline `z-index`.
    pub z_index: i32,
}

/// The position indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSurface {
    /// New text, or `None` to leave the element's text alone.
    pub text: Option<String>,
    /// Whether it carries `visually-hidden`.
    pub hidden: bool,
}

/// The profile panel and its slots.
///
/// Slot values are `None` when the slot is missing or nothing was shown yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSurface {
    /// Carries `open`.
    pub open: bool,
    /// Carries `visually-hidden`.
    pub hidden: bool,
    /// `#profile-name` text.
    pub name: Option<String>,
    /// `#profile-email` text.
    pub email: Option<String>,
    /// `#profile-bio` text.
    pub bio: Option<String>,
    /// `.profile-avatar` inline `background-image`.
    pub avatar_background: Option<String>,
}

/// The nav and its toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSurface {
    /// `#main-nav` carries `open`.
    pub open: bool,
    /// Toggle's `aria-expanded`.
    pub aria_expanded: &'static str,
}

/// One reveal-on-scroll element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealSurface {
    /// Element id.
    pub id: String,
    /// Marker classes.
    pub classes: Vec<&'static str>,
    /// Inline `--delay`, set once revealed.
    pub delay: Option<&'static str>,
}

/// One ripple span.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RippleSurface {
    /// Id of the ripple (stable while it lives).
    pub id: u64,
    /// Id of the hosting button.
    pub button: String,
    /// Width and height in pixels.
    pub size: f64,
    /// Left offset in pixels.
    pub left: f64,
    /// Top offset in pixels.
    pub top: f64,
}

/// A pending `scrollIntoView` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSurface {
    /// Target element id.
    pub target: String,
    /// `"smooth"` or `"auto"`.
    pub behavior: &'static str,
    /// Always `"start"`.
    pub block: &'static str,
}
