#![forbid(unsafe_code)]

//! Main navigation toggle and in-page anchor navigation.
//!
//! Following an internal link closes an open nav, which is the one place the
//! page behaviors touch each other.

use std::collections::BTreeSet;

/// Open/closed state of the main navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    /// Create a closed nav.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Flip the nav and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the nav. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Whether the nav is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Request for the host to scroll an element's top edge to the viewport top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Id of the element to reveal.
    pub target: String,
    /// Smooth scrolling.
    pub smooth: bool,
}

/// Resolves internal `#id` links against the ids present on the page.
#[derive(Debug, Clone, Default)]
pub struct AnchorNavigator {
    targets: BTreeSet<String>,
}

impl AnchorNavigator {
    /// Create a navigator over the given element ids.
    #[must_use]
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `id` exists on the page.
    #[must_use]
    pub fn has_target(&self, id: &str) -> bool {
        self.targets.contains(id)
    }

    /// Follow a link.
    ///
    /// Returns `None` (browser default applies) for `#`, for non-fragment
    /// hrefs, and for unknown targets. Otherwise requests a smooth scroll and
    /// closes `nav` if one is wired and open.
    pub fn follow(&self, href: &str, nav: Option<&mut NavToggle>) -> Option<ScrollRequest> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() || !self.has_target(id) {
            return None;
        }
        if let Some(nav) = nav
            && nav.close()
        {
            swiper_core::debug!(anchor = id, "nav closed by anchor navigation");
        }
        Some(ScrollRequest {
            target: id.to_string(),
            smooth: true,
        })
    }
}
