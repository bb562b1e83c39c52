//! Keyboard session: routes host key events to the transliterator, the smart
//! token editor and caret navigation.
//!
//! `KeyboardSession` owns the pending romaji; the host owns the document and
//! passes it in with every event.

mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use smartkeys_core::document::Document;
use smartkeys_core::romaji::Transliterator;
use smartkeys_core::token::SmartTokenEditor;

pub use types::{KeyEvent, KeyResponse};

pub struct KeyboardSession {
    transliterator: Transliterator,
    editor: SmartTokenEditor,
}

impl Default for KeyboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardSession {
    /// Session using the global romaji tables and settings.
    pub fn new() -> Self {
        Self::with_parts(Transliterator::new(), SmartTokenEditor::new())
    }

    pub fn with_parts(transliterator: Transliterator, editor: SmartTokenEditor) -> Self {
        Self {
            transliterator,
            editor,
        }
    }

    pub fn is_composing(&self) -> bool {
        self.transliterator.is_composing()
    }

    /// Romaji typed but not yet converted, as displayed before the caret.
    pub fn pending(&self) -> String {
        self.transliterator.pending()
    }

    /// Finalize pending input (host-initiated, e.g. the keyboard is dismissed).
    pub fn commit<D: Document + ?Sized>(&mut self, doc: &mut D) -> KeyResponse {
        let was_composing = self.is_composing();
        self.transliterator.commit_pending(doc);
        if was_composing {
            KeyResponse::consumed()
        } else {
            KeyResponse::not_consumed()
        }
    }
}
