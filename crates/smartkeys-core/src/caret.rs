//! Line-wise caret movement for the home / end keys.

use crate::document::Document;

/// Move the caret to just after the previous newline, or to the start of the
/// available context if there is none.
pub fn move_to_line_start<D: Document + ?Sized>(doc: &mut D) {
    let before = doc.context_before(usize::MAX);
    let left = before.chars().rev().take_while(|&c| c != '\n').count();
    if left != 0 {
        doc.move_caret(-(left as isize));
    }
}

/// Move the caret to just before the next newline, or to the end of the
/// available context if there is none.
pub fn move_to_line_end<D: Document + ?Sized>(doc: &mut D) {
    let after = doc.context_after(usize::MAX);
    let right = after.chars().take_while(|&c| c != '\n').count();
    if right != 0 {
        doc.move_caret(right as isize);
    }
}
