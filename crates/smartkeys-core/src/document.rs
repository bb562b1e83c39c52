//! Caret-relative text document capability.
//!
//! Every engine operation is expressed in terms of the five primitives on
//! [`Document`]. Units are Unicode scalar values: one `delete_backward()`
//! removes one `char`, `move_caret(1)` steps over one `char`.

/// A text document the engine edits through its caret.
///
/// Hosts supply the implementation (an OS text-input proxy, a terminal line
/// editor, ...). Out-of-range operations such as deleting at the start of the
/// text are the implementation's concern; the engine never checks.
pub trait Document {
    /// Insert `text` at the caret; the caret ends after it.
    fn insert_text(&mut self, text: &str);

    /// Delete one unit before the caret.
    fn delete_backward(&mut self);

    /// Move the caret by `offset` units (positive = forward).
    fn move_caret(&mut self, offset: isize);

    /// Up to `max_units` units immediately before the caret.
    fn context_before(&self, max_units: usize) -> String;

    /// Up to `max_units` units immediately after the caret.
    fn context_after(&self, max_units: usize) -> String;
}

impl<D: Document + ?Sized> Document for &mut D {
    fn insert_text(&mut self, text: &str) {
        (**self).insert_text(text)
    }

    fn delete_backward(&mut self) {
        (**self).delete_backward()
    }

    fn move_caret(&mut self, offset: isize) {
        (**self).move_caret(offset)
    }

    fn context_before(&self, max_units: usize) -> String {
        (**self).context_before(max_units)
    }

    fn context_after(&self, max_units: usize) -> String {
        (**self).context_after(max_units)
    }
}

/// In-memory document: a `char` buffer with a caret index.
///
/// Deleting at the start or moving past either end clamps silently, like a
/// text field does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringDocument {
    chars: Vec<char>,
    caret: usize,
}

impl StringDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding `text` with the caret at the end.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let caret = chars.len();
        Self { chars, caret }
    }

    /// Split `text` at the first `marker`; the marker itself is dropped and
    /// becomes the caret. Without a marker the caret goes to the end.
    pub fn with_caret_marker(text: &str, marker: char) -> Self {
        match text.split_once(marker) {
            Some((before, after)) => {
                let mut chars: Vec<char> = before.chars().collect();
                let caret = chars.len();
                chars.extend(after.chars());
                Self { chars, caret }
            }
            None => Self::from_text(text),
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Caret position in chars from the start.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn text_before_caret(&self) -> String {
        self.chars[..self.caret].iter().collect()
    }

    pub fn text_after_caret(&self) -> String {
        self.chars[self.caret..].iter().collect()
    }

    /// The text with `marker` inserted at the caret.
    pub fn render_with_caret(&self, marker: char) -> String {
        let mut out = self.text_before_caret();
        out.push(marker);
        out.push_str(&self.text_after_caret());
        out
    }
}

impl Document for StringDocument {
    fn insert_text(&mut self, text: &str) {
        let inserted: Vec<char> = text.chars().collect();
        let n = inserted.len();
        self.chars.splice(self.caret..self.caret, inserted);
        self.caret += n;
    }

    fn delete_backward(&mut self) {
        if self.caret > 0 {
            self.caret -= 1;
            self.chars.remove(self.caret);
        }
    }

    fn move_caret(&mut self, offset: isize) {
        let target = self.caret as isize + offset;
        self.caret = target.clamp(0, self.chars.len() as isize) as usize;
    }

    fn context_before(&self, max_units: usize) -> String {
        let start = self.caret.saturating_sub(max_units);
        self.chars[start..self.caret].iter().collect()
    }

    fn context_after(&self, max_units: usize) -> String {
        let end = self.caret.saturating_add(max_units).min(self.chars.len());
        self.chars[self.caret..end].iter().collect()
    }
}
