#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! The host translates raw browser events (`keydown`, `touchstart`,
//! `touchend`, ...) into these types before handing them to the page
//! runtime. All events derive `Clone` and `PartialEq` for use in tests and
//! pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are viewport pixels (`clientX` / `clientY`)
//! - `KeyEventKind` defaults to `Press`; hosts only forward `keydown`

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Build a press event from a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        Self::new(KeyCode::from_dom_key(key))
    }

    /// Whether this event is a press or an auto-repeat.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes relevant to page interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// `ArrowLeft`.
    Left,
    /// `ArrowRight`.
    Right,
    /// `ArrowUp`.
    Up,
    /// `ArrowDown`.
    Down,
    /// `Enter`.
    Enter,
    /// `Escape`.
    Escape,
    /// `Tab`.
    Tab,
    /// Anything else the page does not care about.
    Other,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` string.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Kind of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default).
    #[default]
    Press,
    /// Key is being held (auto-repeat).
    Repeat,
    /// Key was released.
    Release,
}

/// A touch pointer event on the card list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Phase of the pointer interaction.
    pub kind: PointerKind,
    /// Horizontal viewport position in pixels.
    pub x: f32,
    /// Vertical viewport position in pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Create a touch pointer event.
    #[must_use]
    pub const fn touch(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// `touchstart`.
    Down,
    /// `touchmove`.
    Move,
    /// `touchend`.
    Up,
    /// `touchcancel`.
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_arrow_keys_map_to_codes() {
        assert_eq!(KeyCode::from_dom_key("ArrowLeft"), KeyCode::Left);
        assert_eq!(KeyCode::from_dom_key("ArrowRight"), KeyCode::Right);
        assert_eq!(KeyCode::from_dom_key("Esc"), KeyCode::Escape);
    }

    #[test]
    fn single_char_keys_are_chars() {
        assert_eq!(KeyCode::from_dom_key("a"), KeyCode::Char('a'));
        assert_eq!(KeyCode::from_dom_key("é"), KeyCode::Char('é'));
    }

    #[test]
    fn unknown_named_keys_are_other() {
        assert_eq!(KeyCode::from_dom_key("PageDown"), KeyCode::Other);
        assert_eq!(KeyCode::from_dom_key(""), KeyCode::Other);
    }

    #[test]
    fn release_is_not_press() {
        let ev = KeyEvent::new(KeyCode::Left).with_kind(KeyEventKind::Release);
        assert!(!ev.is_press());
        assert!(KeyEvent::new(KeyCode::Left).is_press());
        assert!(
            KeyEvent::new(KeyCode::Left)
                .with_kind(KeyEventKind::Repeat)
                .is_press()
        );
    }

    #[test]
    fn touch_keeps_coordinates() {
        let ev = PointerEvent::touch(PointerKind::Move, 12.5, -3.0);
        assert_eq!(ev.kind, PointerKind::Move);
        assert_eq!((ev.x, ev.y), (12.5, -3.0));
    }
}
