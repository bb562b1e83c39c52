//! SmartKeys engine for keyboard hosts.
//!
//! Re-exports the core and session crates and exposes them to Swift/Kotlin
//! through UniFFI (see [`api`]).

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use smartkeys_core::{caret, document, romaji, settings, token};
pub use smartkeys_session as session;
