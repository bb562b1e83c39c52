use std::collections::HashMap;

use serde::Deserialize;

/// Longest key any table may hold; lookup starts at this suffix length.
pub const MAX_KEY_LEN: usize = 4;

#[derive(Deserialize)]
struct RomajiConfig {
    small: HashMap<String, String>,
    contracted: HashMap<String, String>,
    plain: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("[{section}] key {key:?} must be lowercase ASCII letters")]
    InvalidKey { section: &'static str, key: String },
    #[error("[{section}] key {key:?} is longer than 4 letters")]
    KeyTooLong { section: &'static str, key: String },
    #[error("[{section}] empty value for key: {key}")]
    EmptyValue { section: &'static str, key: String },
    #[error("romaji tables already initialized")]
    AlreadyInitialized,
}

/// The three parsed tables, still as plain maps.
#[derive(Debug)]
pub struct RomajiMaps {
    pub small: HashMap<String, String>,
    pub contracted: HashMap<String, String>,
    pub plain: HashMap<String, String>,
}

impl RomajiMaps {
    pub fn len(&self) -> usize {
        self.small.len() + self.contracted.len() + self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse TOML text with `[small]`, `[contracted]` and `[plain]` tables.
pub fn parse_romaji_toml(toml_str: &str) -> Result<RomajiMaps, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    validate_table("small", &config.small)?;
    validate_table("contracted", &config.contracted)?;
    validate_table("plain", &config.plain)?;

    Ok(RomajiMaps {
        small: config.small,
        contracted: config.contracted,
        plain: config.plain,
    })
}

fn validate_table(
    section: &'static str,
    table: &HashMap<String, String>,
) -> Result<(), RomajiConfigError> {
    if table.is_empty() {
        return Err(RomajiConfigError::EmptyTable(section));
    }
    for (key, value) in table {
        // The transliterator only ever buffers lowercase letters, so any
        // other key could never match.
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(RomajiConfigError::InvalidKey {
                section,
                key: key.clone(),
            });
        }
        if key.len() > MAX_KEY_LEN {
            return Err(RomajiConfigError::KeyTooLong {
                section,
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue {
                section,
                key: key.clone(),
            });
        }
    }
    Ok(())
}
