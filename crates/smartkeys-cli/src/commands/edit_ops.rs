use std::process;

use smartkeys_core::document::StringDocument;
use smartkeys_core::token::{SmartTokenEditor, Step, TokenKind};

/// Apply `times` smart edits to `text`, whose caret is marked by `marker`.
///
/// Returns the edited text with the marker at the new caret and the kind of
/// the last applied edit, or `None` if the first edit found no token.
pub fn bump(text: &str, marker: char, step: Step, times: usize) -> Option<(String, TokenKind)> {
    let editor = SmartTokenEditor::new();
    let mut doc = StringDocument::with_caret_marker(text, marker);
    let mut last = None;
    for _ in 0..times {
        match editor.adjust_at_caret(&mut doc, step) {
            Some(kind) => last = Some(kind),
            None => break,
        }
    }
    last.map(|kind| (doc.render_with_caret(marker), kind))
}

pub fn bump_cmd(text: &str, marker: char, decrement: bool, times: usize) {
    let step = if decrement {
        Step::Decrement
    } else {
        Step::Increment
    };
    match bump(text, marker, step, times) {
        Some((out, kind)) => {
            eprintln!("adjusted {kind:?}");
            println!("{out}");
        }
        None => {
            eprintln!("No number, time or weekday at the caret");
            process::exit(1);
        }
    }
}
