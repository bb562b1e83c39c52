use super::{replace_token, Step};
use crate::document::Document;

fn step_glyph(cycle: &[char], ch: char, step: Step) -> Option<char> {
    let i = cycle.iter().position(|&c| c == ch)?;
    let n = cycle.len();
    let j = match step {
        Step::Increment => (i + 1) % n,
        Step::Decrement => (i + n - 1) % n,
    };
    Some(cycle[j])
}

/// Rotate the weekday glyph touching the caret, preferring the one before it.
pub(super) fn rotate_weekday<D: Document + ?Sized>(doc: &mut D, step: Step, cycle: &[char]) -> bool {
    let mut buf = [0u8; 4];

    let prev = doc.context_before(1).chars().next_back();
    if let Some(next) = prev.and_then(|ch| step_glyph(cycle, ch, step)) {
        replace_token(doc, 0, 1, next.encode_utf8(&mut buf));
        return true;
    }

    let following = doc.context_after(1).chars().next();
    if let Some(next) = following.and_then(|ch| step_glyph(cycle, ch, step)) {
        replace_token(doc, 1, 1, next.encode_utf8(&mut buf));
        return true;
    }

    false
}
