use smartkeys_core::document::Document;

/// Text document implemented by the host (e.g. wrapping `UITextDocumentProxy`).
#[uniffi::export(with_foreign)]
pub trait SkTextDocument: Send + Sync {
    fn insert_text(&self, text: String);
    fn delete_backward(&self);
    fn adjust_text_position(&self, offset: i32);
    /// Text before the caret; may return more than `max_units`.
    fn context_before(&self, max_units: u32) -> String;
    /// Text after the caret; may return more than `max_units`.
    fn context_after(&self, max_units: u32) -> String;
}

/// Adapts a foreign document to the core [`Document`] trait.
pub(super) struct ForeignDocument<'a>(pub(super) &'a dyn SkTextDocument);

fn units(max_units: usize) -> u32 {
    u32::try_from(max_units).unwrap_or(u32::MAX)
}

impl Document for ForeignDocument<'_> {
    fn insert_text(&mut self, text: &str) {
        self.0.insert_text(text.to_string());
    }

    fn delete_backward(&mut self) {
        self.0.delete_backward();
    }

    fn move_caret(&mut self, offset: isize) {
        let offset = offset.clamp(i32::MIN as isize, i32::MAX as isize) as i32;
        self.0.adjust_text_position(offset);
    }

    fn context_before(&self, max_units: usize) -> String {
        let text = self.0.context_before(units(max_units));
        let count = text.chars().count();
        if count <= max_units {
            return text;
        }
        text.chars().skip(count - max_units).collect()
    }

    fn context_after(&self, max_units: usize) -> String {
        let text = self.0.context_after(units(max_units));
        text.chars().take(max_units).collect()
    }
}
