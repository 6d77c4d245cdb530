#![forbid(unsafe_code)]

//! Interactive widgets for the class website.
//!
//! The student carousel is the only stateful widget with interacting rules:
//!
//! - [`card`] - immutable card records and the fixed [`CardDeck`](card::CardDeck)
//! - [`carousel`] - the [`CarouselController`](carousel::CarouselController) state machine
//! - [`dispatch`] - raw input to [`CarouselAction`](dispatch::CarouselAction)
//! - [`profile`] - the snapshot-based profile panel
//! - [`swiper`] - controller, dispatcher and panel wired together
//!
//! The remaining page behaviors are small one-shot state machines:
//! [`nav`], [`reveal`] and [`ripple`].

pub mod card;
pub mod carousel;
pub mod dispatch;
pub mod nav;
pub mod profile;
pub mod reveal;
pub mod ripple;
pub mod swiper;

pub use card::{Card, CardDeck};
pub use carousel::{CardClasses, CarouselConfig, CarouselController};
pub use dispatch::{CarouselAction, CarouselInput, CarouselTarget, InputDispatcher};
pub use profile::{ProfilePanel, ProfileSnapshot};
pub use swiper::StudentSwiper;
