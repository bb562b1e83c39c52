mod basic;
mod proptest_fsm;

use smartkeys_core::document::StringDocument;

use super::{KeyEvent, KeyResponse, KeyboardSession};

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(
    session: &mut KeyboardSession,
    doc: &mut StringDocument,
    s: &str,
) -> Vec<KeyResponse> {
    s.chars()
        .map(|ch| session.handle_key(doc, KeyEvent::for_char(ch)))
        .collect()
}

/// Type `s` into an empty document and return its text and the pending romaji.
pub(super) fn typed(s: &str) -> (String, String) {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    type_string(&mut session, &mut doc, s);
    (doc.text(), session.pending())
}
