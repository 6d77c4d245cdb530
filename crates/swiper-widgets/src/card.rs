#![forbid(unsafe_code)]

//! Student card records.
//!
//! Cards are captured once from the page markup and never change. A card
//! may lack any of its display fields; [`Card::display_name`] resolves the
//! name through its fallbacks and the profile snapshot fills the rest with
//! empty strings.

use crate::profile::ProfileSnapshot;

/// Name shown when a card carries neither `data-name` nor a `.name` element.
pub const FALLBACK_NAME: &str = "Siswa";

/// One student card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    index: usize,
    data_name: Option<String>,
    name_text: Option<String>,
    email: Option<String>,
    bio: Option<String>,
    avatar: Option<String>,
    centered: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl Card {
    /// Create an empty card. The index is assigned by [`CardDeck::new`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `data-name` attribute.
    #[must_use]
    pub fn data_name(mut self, name: impl Into<String>) -> Self {
        self.data_name = non_empty(Some(name.into()));
        self
    }

    /// Set the text of the card's `.name` element.
    #[must_use]
    pub fn name_text(mut self, text: impl Into<String>) -> Self {
        self.name_text = non_empty(Some(text.into()));
        self
    }

    /// Set the `data-email` attribute.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = non_empty(Some(email.into()));
        self
    }

    /// Set the `data-bio` attribute.
    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = non_empty(Some(bio.into()));
        self
    }

    /// Set the avatar image source.
    #[must_use]
    pub fn avatar(mut self, src: impl Into<String>) -> Self {
        self.avatar = non_empty(Some(src.into()));
        self
    }

    /// Mark the card as centered in the initial markup.
    #[must_use]
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Build from optional fields, as decoded from markup.
    #[must_use]
    pub fn from_parts(
        data_name: Option<String>,
        name_text: Option<String>,
        email: Option<String>,
        bio: Option<String>,
        avatar: Option<String>,
        centered: bool,
    ) -> Self {
        Self {
            index: 0,
            data_name: non_empty(data_name),
            name_text: non_empty(name_text),
            email: non_empty(email),
            bio: non_empty(bio),
            avatar: non_empty(avatar),
            centered,
        }
    }

    /// Position in the deck.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name to display: `data-name`, then `.name` text, then [`FALLBACK_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.data_name
            .as_deref()
            .or(self.name_text.as_deref())
            .unwrap_or(FALLBACK_NAME)
    }

    /// Email, if present.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Biography, if present.
    #[must_use]
    pub fn biography(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Avatar image source, if present.
    #[must_use]
    pub fn avatar_src(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Whether the markup flagged this card as initially centered.
    #[must_use]
    pub fn is_initially_centered(&self) -> bool {
        self.centered
    }

    /// Copy the display fields into a detached profile snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            name: self.display_name().to_string(),
            email: self.email.clone().unwrap_or_default(),
            bio: self.bio.clone().unwrap_or_default(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Fixed, ordered card collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Capture the cards in markup order and assign their indices.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards = cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| Card { index, ..card })
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Starting center: the first card flagged centered, else the middle.
    #[must_use]
    pub fn initial_center(&self) -> usize {
        self.cards
            .iter()
            .position(Card::is_initially_centered)
            .unwrap_or(self.cards.len() / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_prefers_data_attribute() {
        let card = Card::new().data_name("Ani").name_text("Ani S.");
        assert_eq!(card.display_name(), "Ani");
    }

    #[test]
    fn name_falls_back_to_name_text_then_placeholder() {
        assert_eq!(Card::new().name_text("Budi").display_name(), "Budi");
        assert_eq!(Card::new().display_name(), FALLBACK_NAME);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let card = Card::new().data_name("").name_text("").email("");
        assert_eq!(card.display_name(), FALLBACK_NAME);
        assert_eq!(card.email_address(), None);
    }

    #[test]
    fn snapshot_defaults_missing_fields() {
        let snap = Card::new().data_name("Citra").avatar("img/c.png").snapshot();
        assert_eq!(snap.name, "Citra");
        assert_eq!(snap.email, "");
        assert_eq!(snap.bio, "");
        assert_eq!(snap.avatar.as_deref(), Some("img/c.png"));
    }

    #[test]
    fn deck_assigns_indices_in_order() {
        let deck = CardDeck::new([Card::new(), Card::new(), Card::new()]);
        let indices: Vec<_> = deck.iter().map(Card::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn initial_center_uses_flag() {
        let deck = CardDeck::new([Card::new(), Card::new().centered(true), Card::new(), Card::new()]);
        assert_eq!(deck.initial_center(), 1);
    }

    #[test]
    fn initial_center_defaults_to_middle() {
        assert_eq!(CardDeck::new(vec![Card::new(); 5]).initial_center(), 2);
        assert_eq!(CardDeck::new(vec![Card::new(); 4]).initial_center(), 2);
        assert_eq!(CardDeck::default().initial_center(), 0);
    }

    #[test]
    fn first_flagged_card_wins() {
        let deck = CardDeck::new([
            Card::new(),
            Card::new(),
            Card::new().centered(true),
            Card::new().centered(true),
        ]);
        assert_eq!(deck.initial_center(), 2);
    }
}
