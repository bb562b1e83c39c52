//! Property-based tests for the KeyboardSession event loop.
//!
//! Generates random key sequences via proptest and verifies that structural
//! invariants hold after every event.

use proptest::prelude::*;

use smartkeys_core::document::StringDocument;

use crate::{KeyEvent, KeyboardSession};

// ---------------------------------------------------------------------------
// Strategy: weighted random event generation
// ---------------------------------------------------------------------------

fn arb_romaji_char() -> impl Strategy<Value = char> {
    // Vowels and n at higher weight for more realistic romaji
    prop_oneof![
        3 => Just('a'),
        3 => Just('i'),
        3 => Just('u'),
        3 => Just('e'),
        3 => Just('o'),
        3 => Just('n'),
        1 => prop::sample::select(vec![
            'k', 's', 't', 'h', 'm', 'y', 'r', 'w', 'g', 'z', 'd', 'b', 'p', 'c', 'f', 'j',
            'l', 'v', 'x', 'q', 'K', 'N',
        ]),
    ]
}

fn arb_event() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        50 => arb_romaji_char().prop_map(KeyEvent::Text),
        4 => prop::sample::select(vec!['0', '1', '5', '9', ':', '-', '、', '火'])
            .prop_map(KeyEvent::Text),
        8 => Just(KeyEvent::Backspace),
        4 => Just(KeyEvent::Space),
        2 => Just(KeyEvent::Enter),
        2 => Just(KeyEvent::Commit),
        3 => Just(KeyEvent::CaretLeft),
        3 => Just(KeyEvent::CaretRight),
        1 => Just(KeyEvent::LineStart),
        1 => Just(KeyEvent::LineEnd),
        3 => Just(KeyEvent::Increment),
        3 => Just(KeyEvent::Decrement),
    ]
}

// ---------------------------------------------------------------------------
// Invariant checks — run after every event
// ---------------------------------------------------------------------------

fn check_invariants(session: &KeyboardSession, doc: &StringDocument) -> Result<(), TestCaseError> {
    let pending = session.pending();
    prop_assert!(
        doc.text_before_caret().ends_with(&pending),
        "pending {:?} is not displayed before caret in {:?}",
        pending,
        doc.render_with_caret('|')
    );
    prop_assert_eq!(session.is_composing(), !pending.is_empty());
    prop_assert!(
        pending.chars().all(|c| c.is_ascii_lowercase()),
        "pending holds a non-letter: {:?}",
        pending
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pending_is_always_displayed_before_caret(
        events in prop::collection::vec(arb_event(), 1..80)
    ) {
        let mut session = KeyboardSession::new();
        let mut doc = StringDocument::new();
        for event in events {
            session.handle_key(&mut doc, event);
            check_invariants(&session, &doc)?;
        }
    }

    #[test]
    fn backspace_unwinds_exactly_the_pending_letters(
        letters in prop::collection::vec(arb_romaji_char(), 1..30)
    ) {
        let mut session = KeyboardSession::new();
        let mut doc = StringDocument::from_text("前");
        for ch in letters {
            session.handle_key(&mut doc, KeyEvent::Text(ch));
        }
        let converted = doc.text();
        let pending_len = session.pending().chars().count();
        let keep = converted.chars().count() - pending_len;

        for _ in 0..pending_len {
            session.handle_key(&mut doc, KeyEvent::Backspace);
        }
        prop_assert!(!session.is_composing());
        let expected: String = converted.chars().take(keep).collect();
        prop_assert_eq!(doc.text(), expected);
        prop_assert!(doc.text().starts_with('前'));
    }

    #[test]
    fn commit_never_leaves_a_bare_trailing_n(
        letters in prop::collection::vec(arb_romaji_char(), 1..30)
    ) {
        let mut session = KeyboardSession::new();
        let mut doc = StringDocument::new();
        for ch in letters {
            session.handle_key(&mut doc, KeyEvent::Text(ch));
        }
        let lone_n = session.pending() == "n";
        session.handle_key(&mut doc, KeyEvent::Commit);
        prop_assert!(!session.is_composing());
        if lone_n {
            prop_assert!(doc.text().ends_with('ん'));
        }
    }
}
