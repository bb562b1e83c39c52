use super::{replace_token, Step};
use crate::document::Document;

/// Render `value` the way `original` was written: a multi-digit token with a
/// leading zero keeps its width, anything else is printed plainly.
fn render(original: &str, value: u64) -> String {
    if original.len() > 1 && original.starts_with('0') {
        format!("{value:0width$}", width = original.len())
    } else {
        value.to_string()
    }
}

/// Step the ASCII digit run touching the caret. Decrement floors at 0.
pub(super) fn adjust_number<D: Document + ?Sized>(doc: &mut D, step: Step, window: usize) -> bool {
    let before = doc.context_before(window);
    let after = doc.context_after(window);

    // ASCII digits are one byte each, so char counts double as byte offsets.
    let left_len = before.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    let right_len = after.chars().take_while(|c| c.is_ascii_digit()).count();
    let token = format!(
        "{}{}",
        &before[before.len() - left_len..],
        &after[..right_len]
    );
    if token.is_empty() {
        return false;
    }

    let Ok(value) = token.parse::<u64>() else {
        return false;
    };
    let value = match step {
        Step::Increment => match value.checked_add(1) {
            Some(v) => v,
            None => return false,
        },
        Step::Decrement => value.saturating_sub(1),
    };

    replace_token(doc, right_len, token.len(), &render(&token, value));
    true
}
