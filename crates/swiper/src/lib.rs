#![forbid(unsafe_code)]

//! Student swiper public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use swiper_core::event::{KeyCode, KeyEvent, KeyEventKind, PointerEvent, PointerKind};
pub use swiper_core::geometry::Rect;
pub use swiper_core::gesture::{SwipeConfig, SwipeDirection, SwipeRecognizer};
pub use swiper_core::lock::AnimationLock;
pub use swiper_core::timer::{TimerId, TimerQueue};

#[cfg(feature = "tracing-json")]
pub use swiper_core::logging::init_json_subscriber;

// --- Layout re-exports -----------------------------------------------------

pub use swiper_layout::{CardPlacement, LayoutConfig, SelectionStatus, Slot};

// --- Widget re-exports -----------------------------------------------------

pub use swiper_widgets::nav::{AnchorNavigator, NavToggle, ScrollRequest};
pub use swiper_widgets::reveal::{HeroEntrance, IntersectionEntry, RevealConfig, RevealTracker};
pub use swiper_widgets::ripple::{RippleConfig, RippleLayer};
pub use swiper_widgets::{
    Card, CardClasses, CardDeck, CarouselAction, CarouselConfig, CarouselController,
    CarouselInput, CarouselTarget, ProfilePanel, ProfileSnapshot, StudentSwiper,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use swiper_web::{
    ClickEvent, ClickTarget, Markup, MarkupError, PageConfig, PageEvent, PageHost, PageSurface,
    StepResult,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// The host's markup description could not be read.
    #[cfg(feature = "web")]
    Markup(MarkupError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            #[cfg(feature = "web")]
            Self::Markup(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            #[cfg(feature = "web")]
            Self::Markup(ref err) => Some(err),
        }
    }
}

#[cfg(feature = "web")]
impl From<MarkupError> for Error {
    fn from(err: MarkupError) -> Self {
        Self::Markup(err)
    }
}

/// Standard result type for swiper APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse `json` and wire a page with the default configuration.
#[cfg(feature = "web")]
pub fn page_from_json(json: &str) -> Result<PageHost> {
    let markup = Markup::from_json(json)?;
    Ok(PageHost::new(&markup, PageConfig::default()))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Card, CardDeck, CarouselAction, CarouselConfig, CarouselInput, CarouselTarget, Error,
        KeyCode, KeyEvent, PointerEvent, PointerKind, Result, StudentSwiper,
    };

    #[cfg(feature = "web")]
    pub use crate::{Markup, PageConfig, PageEvent, PageHost};

    pub use crate::{core, layout, widgets};

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use swiper_core as core;
pub use swiper_layout as layout;
pub use swiper_widgets as widgets;

#[cfg(feature = "web")]
pub use swiper_web as web;
