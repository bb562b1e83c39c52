use tracing::{debug, debug_span};

use smartkeys_core::caret::{move_to_line_end, move_to_line_start};
use smartkeys_core::document::Document;
use smartkeys_core::token::Step;

use super::types::{KeyEvent, KeyResponse};
use super::KeyboardSession;

impl KeyboardSession {
    /// Process a key event against `doc`.
    pub fn handle_key<D: Document + ?Sized>(&mut self, doc: &mut D, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::Text(ch) => {
                self.transliterator.feed(doc, ch);
                KeyResponse::consumed()
            }

            // Pending romaji is taken back one letter at a time; after that
            // it is an ordinary backspace.
            KeyEvent::Backspace => {
                if !self.transliterator.handle_delete(doc) {
                    doc.delete_backward();
                }
                KeyResponse::consumed()
            }

            KeyEvent::Space => self.commit_and_insert(doc, " "),

            KeyEvent::Enter => self.commit_and_insert(doc, "\n"),

            KeyEvent::Commit => self.commit(doc),

            // Everything below moves or rewrites around the caret, which
            // would strand pending letters away from it: commit first.
            KeyEvent::CaretLeft => {
                self.transliterator.commit_pending(doc);
                doc.move_caret(-1);
                KeyResponse::consumed()
            }

            KeyEvent::CaretRight => {
                self.transliterator.commit_pending(doc);
                doc.move_caret(1);
                KeyResponse::consumed()
            }

            KeyEvent::LineStart => {
                self.transliterator.commit_pending(doc);
                move_to_line_start(doc);
                KeyResponse::consumed()
            }

            KeyEvent::LineEnd => {
                self.transliterator.commit_pending(doc);
                move_to_line_end(doc);
                KeyResponse::consumed()
            }

            KeyEvent::Increment => self.adjust(doc, Step::Increment),

            KeyEvent::Decrement => self.adjust(doc, Step::Decrement),
        }
    }

    fn commit_and_insert<D: Document + ?Sized>(&mut self, doc: &mut D, text: &str) -> KeyResponse {
        self.transliterator.commit_pending(doc);
        doc.insert_text(text);
        KeyResponse::consumed()
    }

    fn adjust<D: Document + ?Sized>(&mut self, doc: &mut D, step: Step) -> KeyResponse {
        self.transliterator.commit_pending(doc);
        let kind = self.editor.adjust_at_caret(doc, step);
        if kind.is_none() {
            debug!(?step, "nothing to adjust");
        }
        KeyResponse::adjusted(kind)
    }
}
