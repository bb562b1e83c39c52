//! Caret-aware ±1 editing of the token under the caret.
//!
//! Three token shapes are tried in a fixed order: an `H:MM` time, a single
//! weekday glyph, then a bare digit run. The first one found at the caret is
//! rewritten in place through the [`Document`] primitives.

mod number;
mod time;
mod weekday;

use tracing::{debug, debug_span};

use crate::document::Document;
use crate::settings::{settings, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increment,
    Decrement,
}

/// Which token an adjustment rewrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Time,
    Weekday,
    Number,
}

/// Stateless editor; only carries its scan configuration.
#[derive(Debug, Clone)]
pub struct SmartTokenEditor {
    time_window: usize,
    number_window: usize,
    weekdays: Vec<char>,
}

impl Default for SmartTokenEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SmartTokenEditor {
    /// Editor configured from the global settings.
    pub fn new() -> Self {
        Self::from_settings(settings())
    }

    pub fn from_settings(s: &Settings) -> Self {
        Self {
            time_window: s.scan.time_window,
            number_window: s.scan.number_window,
            weekdays: s.weekday_glyphs().to_vec(),
        }
    }

    /// Adjust the token at the caret by one step, returning which kind of
    /// token was changed, or `None` if nothing at the caret qualifies.
    pub fn adjust_at_caret<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        step: Step,
    ) -> Option<TokenKind> {
        let _span = debug_span!("adjust_at_caret", ?step).entered();

        let kind = if time::adjust_time(doc, step, self.time_window) {
            TokenKind::Time
        } else if weekday::rotate_weekday(doc, step, &self.weekdays) {
            TokenKind::Weekday
        } else if number::adjust_number(doc, step, self.number_window) {
            TokenKind::Number
        } else {
            debug!("no token at caret");
            return None;
        };
        debug!(?kind, "token adjusted");
        Some(kind)
    }

    pub fn increment_at_caret<D: Document + ?Sized>(&self, doc: &mut D) -> bool {
        self.adjust_at_caret(doc, Step::Increment).is_some()
    }

    pub fn decrement_at_caret<D: Document + ?Sized>(&self, doc: &mut D) -> bool {
        self.adjust_at_caret(doc, Step::Decrement).is_some()
    }
}

/// Move the caret forward by `advance`, delete `len` units backward and
/// insert `text`. The caret ends after `text`.
fn replace_token<D: Document + ?Sized>(doc: &mut D, advance: usize, len: usize, text: &str) {
    if advance != 0 {
        doc.move_caret(advance as isize);
    }
    for _ in 0..len {
        doc.delete_backward();
    }
    doc.insert_text(text);
}
