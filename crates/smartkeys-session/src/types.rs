use smartkeys_core::token::TokenKind;

/// A discrete event forwarded by the host keyboard.
///
/// Shift handling is the host's job; `Text` carries the character as shown
/// on the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Text(char),
    Backspace,
    Space,
    Enter,
    /// End-of-word trigger without inserting anything.
    Commit,
    CaretLeft,
    CaretRight,
    LineStart,
    LineEnd,
    Increment,
    Decrement,
}

impl KeyEvent {
    /// Event a typed character maps to: space and newline get their keys.
    pub fn for_char(ch: char) -> Self {
        match ch {
            ' ' => Self::Space,
            '\n' => Self::Enter,
            _ => Self::Text(ch),
        }
    }
}

/// Outcome of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    /// False when the event had nothing to act on (e.g. ±1 with no token at
    /// the caret); the host may then run its own default.
    pub consumed: bool,
    /// Token rewritten by `Increment` / `Decrement`.
    pub adjusted: Option<TokenKind>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            adjusted: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn adjusted(kind: Option<TokenKind>) -> Self {
        Self {
            consumed: kind.is_some(),
            adjusted: kind,
        }
    }
}
