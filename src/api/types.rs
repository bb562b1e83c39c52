use smartkeys_core::token::TokenKind;
use smartkeys_session::{KeyEvent, KeyResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SkError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Record)]
pub struct SkKeyResponse {
    pub consumed: bool,
    pub adjusted: Option<SkTokenKind>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum SkTokenKind {
    Time,
    Weekday,
    Number,
}

/// Key event from the host. `Text` may carry several characters (e.g. a
/// flick resolved to a multi-glyph output); they are fed one by one.
#[derive(Clone, Debug, uniffi::Enum)]
pub enum SkKeyEvent {
    Text { text: String },
    Backspace,
    Space,
    Enter,
    Commit,
    CaretLeft,
    CaretRight,
    LineStart,
    LineEnd,
    Increment,
    Decrement,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<TokenKind> for SkTokenKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Time => Self::Time,
            TokenKind::Weekday => Self::Weekday,
            TokenKind::Number => Self::Number,
        }
    }
}

impl From<KeyResponse> for SkKeyResponse {
    fn from(resp: KeyResponse) -> Self {
        Self {
            consumed: resp.consumed,
            adjusted: resp.adjusted.map(SkTokenKind::from),
        }
    }
}

pub(super) fn to_key_events(event: SkKeyEvent) -> Vec<KeyEvent> {
    match event {
        SkKeyEvent::Text { text } => text.chars().map(KeyEvent::for_char).collect(),
        SkKeyEvent::Backspace => vec![KeyEvent::Backspace],
        SkKeyEvent::Space => vec![KeyEvent::Space],
        SkKeyEvent::Enter => vec![KeyEvent::Enter],
        SkKeyEvent::Commit => vec![KeyEvent::Commit],
        SkKeyEvent::CaretLeft => vec![KeyEvent::CaretLeft],
        SkKeyEvent::CaretRight => vec![KeyEvent::CaretRight],
        SkKeyEvent::LineStart => vec![KeyEvent::LineStart],
        SkKeyEvent::LineEnd => vec![KeyEvent::LineEnd],
        SkKeyEvent::Increment => vec![KeyEvent::Increment],
        SkKeyEvent::Decrement => vec![KeyEvent::Decrement],
    }
}
