use super::*;

// --- Romaji input ---

#[test]
fn test_romaji_input_ka() {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();

    let resp = session.handle_key(&mut doc, KeyEvent::Text('k'));
    assert!(resp.consumed);
    assert!(session.is_composing());
    assert_eq!(doc.text(), "k");

    let resp = session.handle_key(&mut doc, KeyEvent::Text('a'));
    assert!(resp.consumed);
    assert!(!session.is_composing());
    assert_eq!(doc.text(), "か");
}

#[test]
fn test_romaji_sentence() {
    assert_eq!(
        typed("watashiha gakusei desu."),
        ("わたしは がくせい です.".into(), "".into())
    );
}

#[test]
fn test_sokuon_and_hatsuon() {
    assert_eq!(typed("zasshi"), ("ざっし".into(), "".into()));
    assert_eq!(typed("kanji"), ("かんじ".into(), "".into()));
    assert_eq!(typed("hannnou"), ("はんのう".into(), "".into()));
}

#[test]
fn test_shift_letters_lowered() {
    assert_eq!(typed("Tokyo"), ("ときょ".into(), "".into()));
}

#[test]
fn test_keyboard_symbols_pass_through() {
    // the long-vowel and punctuation keys send their glyphs as text
    assert_eq!(typed("ra-men"), ("ら-めn".into(), "n".into()));
    assert_eq!(typed("ra－men、"), ("ら－めん、".into(), "".into()));
    assert_eq!(typed("so。"), ("そ。".into(), "".into()));
}

// --- Word-end handling ---

#[test]
fn test_space_resolves_trailing_n() {
    assert_eq!(typed("hon "), ("ほん ".into(), "".into()));
}

#[test]
fn test_enter_resolves_trailing_n() {
    assert_eq!(typed("pan\n"), ("ぱん\n".into(), "".into()));
}

#[test]
fn test_space_keeps_raw_letters() {
    assert_eq!(typed("ky "), ("ky ".into(), "".into()));
}

#[test]
fn test_commit_event() {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    type_string(&mut session, &mut doc, "min");
    let resp = session.handle_key(&mut doc, KeyEvent::Commit);
    assert!(resp.consumed);
    assert_eq!(doc.text(), "みん");

    let resp = session.handle_key(&mut doc, KeyEvent::Commit);
    assert!(!resp.consumed);
    assert_eq!(doc.text(), "みん");
}

#[test]
fn test_commit_method() {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    type_string(&mut session, &mut doc, "tt");
    assert!(session.commit(&mut doc).consumed);
    assert_eq!(doc.text(), "っt");
    assert!(!session.is_composing());
}

// --- Backspace ---

#[test]
fn test_backspace_removes_pending() {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::from_text("あ");
    type_string(&mut session, &mut doc, "ky");
    assert_eq!(session.pending(), "ky");

    session.handle_key(&mut doc, KeyEvent::Backspace);
    assert_eq!(doc.text(), "あk");
    assert_eq!(session.pending(), "k");

    session.handle_key(&mut doc, KeyEvent::Backspace);
    assert_eq!(doc.text(), "あ");
    assert!(!session.is_composing());
}

#[test]
fn test_backspace_falls_back_to_plain_delete() {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    type_string(&mut session, &mut doc, "kana");
    assert_eq!(doc.text(), "かな");

    let resp = session.handle_key(&mut doc, KeyEvent::Backspace);
    assert!(resp.consumed);
    assert_eq!(doc.text(), "か");
}

#[test]
fn test_backspace_then_retype() {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    type_string(&mut session, &mut doc, "sy");
    session.handle_key(&mut doc, KeyEvent::Backspace);
    type_string(&mut session, &mut doc, "hu");
    assert_eq!(doc.text(), "しゅ");
}
