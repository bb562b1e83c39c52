//! Text-editing core of the SmartKeys keyboard: romaji-to-kana transliteration
//! and caret-aware ±1 editing of numbers, times and weekdays.
//!
//! Everything here talks to the host through [`document::Document`]; there is
//! no UI code.

pub mod caret;
pub mod document;
pub mod romaji;
pub mod settings;
pub mod token;
