//! Romaji-to-kana transliteration.
//!
//! Letters are typed straight into the document and replaced in place as soon
//! as the tail of the pending input matches a table key, handling sokuon (っ)
//! and hatsuon (ん) along the way.

mod config;
mod lookup;
mod table;
mod transliterator;

pub use config::{parse_romaji_toml, RomajiConfigError, RomajiMaps, MAX_KEY_LEN};
pub use lookup::{RomajiTables, SuffixMatch, TableClass};
pub use table::default_toml;
pub use transliterator::Transliterator;
