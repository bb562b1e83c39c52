use std::io::{self, BufRead};

use smartkeys_core::document::StringDocument;
use smartkeys_session::{KeyEvent, KeyboardSession};

use super::die;

/// Type `input` into a fresh document the way the keyboard would, then
/// commit at the end.
pub fn transliterate(input: &str) -> String {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    for ch in input.chars() {
        session.handle_key(&mut doc, KeyEvent::for_char(ch));
    }
    session.commit(&mut doc);
    doc.text()
}

/// Convert each argument, or each stdin line when there are none.
pub fn convert_cmd(inputs: &[String]) {
    if !inputs.is_empty() {
        println!("{}", transliterate(&inputs.join(" ")));
        return;
    }
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        println!("{}", transliterate(&line));
    }
}
