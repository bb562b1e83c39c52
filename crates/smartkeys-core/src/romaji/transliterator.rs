use std::sync::Arc;

use tracing::debug;

use super::lookup::RomajiTables;
use crate::document::Document;

const HATSUON: &str = "ん";
const SOKUON: &str = "っ";

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(ch: char) -> bool {
    ch.is_ascii_lowercase() && !is_vowel(ch)
}

/// Consonants whose doubling produces っ. `n` is excluded: `nn` closes to ん.
fn is_sokuon_target(ch: char) -> bool {
    is_consonant(ch) && ch != 'n'
}

/// Types romaji straight into a document, replacing the raw letters with
/// kana as soon as a table key matches.
///
/// `pending` holds the letters that are on screen right before the caret but
/// not yet converted.
pub struct Transliterator {
    tables: Arc<RomajiTables>,
    pending: Vec<char>,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator {
    pub fn new() -> Self {
        Self::with_tables(RomajiTables::global())
    }

    pub fn with_tables(tables: Arc<RomajiTables>) -> Self {
        Self {
            tables,
            pending: Vec::new(),
        }
    }

    pub fn pending(&self) -> String {
        self.pending.iter().collect()
    }

    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    fn pending_is_lone_n(&self) -> bool {
        self.pending.len() == 1 && self.pending[0] == 'n'
    }

    /// Replace the displayed lone `n` with ん.
    fn close_hatsuon<D: Document + ?Sized>(&mut self, doc: &mut D) {
        doc.delete_backward();
        doc.insert_text(HATSUON);
        self.pending.clear();
    }

    /// Feed one typed character.
    ///
    /// Anything that is not an ASCII letter commits the pending input and is
    /// inserted unchanged.
    pub fn feed<D: Document + ?Sized>(&mut self, doc: &mut D, input: char) {
        if !input.is_ascii_alphabetic() {
            self.commit_pending(doc);
            let mut buf = [0u8; 4];
            doc.insert_text(input.encode_utf8(&mut buf));
            return;
        }

        let ch = input.to_ascii_lowercase();

        if self.pending_is_lone_n() {
            // "nn": the second n is never displayed
            if ch == 'n' {
                self.close_hatsuon(doc);
                return;
            }
            // n before another consonant: ん, then handle ch normally
            if is_consonant(ch) && ch != 'y' {
                self.close_hatsuon(doc);
            }
        }

        if self.pending.last() == Some(&ch) && is_sokuon_target(ch) {
            doc.delete_backward();
            doc.insert_text(SOKUON);
            let mut buf = [0u8; 4];
            doc.insert_text(ch.encode_utf8(&mut buf));
            self.pending.clear();
            self.pending.push(ch);
            return;
        }

        let mut buf = [0u8; 4];
        doc.insert_text(ch.encode_utf8(&mut buf));
        self.pending.push(ch);

        let hit = self
            .tables
            .longest_suffix_match(&self.pending)
            .map(|m| (m.len, m.kana.to_string()));
        if let Some((len, kana)) = hit {
            for _ in 0..len {
                doc.delete_backward();
            }
            doc.insert_text(&kana);
            debug!(len, %kana, "romaji matched");
            self.pending.clear();
            return;
        }

        if self.pending.ends_with(&['n', 'n']) {
            doc.delete_backward();
            doc.delete_backward();
            doc.insert_text(HATSUON);
            self.pending.clear();
        }
    }

    /// Take back the last pending letter, deleting it from the document.
    ///
    /// Returns false when nothing is pending; the caller then performs its
    /// own deletion.
    pub fn handle_delete<D: Document + ?Sized>(&mut self, doc: &mut D) -> bool {
        if self.pending.pop().is_some() {
            doc.delete_backward();
            true
        } else {
            false
        }
    }

    /// Finalize the pending input at a word boundary.
    ///
    /// A lone trailing `n` becomes ん; any other pending letters stay on
    /// screen as they are.
    pub fn commit_pending<D: Document + ?Sized>(&mut self, doc: &mut D) {
        if self.pending.is_empty() {
            return;
        }
        if self.pending_is_lone_n() {
            self.close_hatsuon(doc);
        } else {
            debug!(pending = %self.pending(), "committing raw letters");
            self.pending.clear();
        }
    }
}
