//! UniFFI export layer: Swift/Kotlin bindings for the SmartKeys engine.
//!
//! The host owns the text field and implements [`SkTextDocument`]; the
//! engine drives it through [`SkSession`].

mod document;
mod session;
mod types;

pub use document::SkTextDocument;
pub use session::SkSession;
pub use types::{SkError, SkKeyEvent, SkKeyResponse, SkTokenKind};

use std::path::Path;

use smartkeys_core::document::StringDocument;
use smartkeys_core::romaji::RomajiTables;
use smartkeys_session::{KeyEvent, KeyboardSession};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Type `romaji` into an empty field and commit, returning the field text.
#[uniffi::export]
fn transliterate(romaji: String) -> String {
    let mut session = KeyboardSession::new();
    let mut doc = StringDocument::new();
    for ch in romaji.chars() {
        session.handle_key(&mut doc, KeyEvent::for_char(ch));
    }
    session.handle_key(&mut doc, KeyEvent::Commit);
    doc.text()
}

#[uniffi::export]
fn romaji_load_config(path: String) -> Result<(), SkError> {
    let content = std::fs::read_to_string(&path).map_err(|e| SkError::Io {
        msg: format!("{path}: {e}"),
    })?;
    RomajiTables::init_custom(content).map_err(|e| SkError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), SkError> {
    let content = std::fs::read_to_string(&path).map_err(|e| SkError::Io {
        msg: format!("{path}: {e}"),
    })?;
    smartkeys_core::settings::init_custom(content)
        .map_err(|e| SkError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn romaji_default_config() -> String {
    smartkeys_core::romaji::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    smartkeys_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
