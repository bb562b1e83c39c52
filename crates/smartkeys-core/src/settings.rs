//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Days in the weekday cycle.
pub const WEEKDAY_COUNT: usize = 7;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scan: ScanSettings,
    weekday: WeekdaySettings,
    /// Parsed weekday cycle, Monday first.
    #[serde(skip)]
    weekday_glyphs: Vec<char>,
}

impl Settings {
    pub fn weekday_glyphs(&self) -> &[char] {
        &self.weekday_glyphs
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    pub time_window: usize,
    pub number_window: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct WeekdaySettings {
    cycle: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.weekday_glyphs = parse_weekday_cycle(&s.weekday.cycle)?;
    Ok(s)
}

fn parse_weekday_cycle(raw: &[String]) -> Result<Vec<char>, SettingsError> {
    if raw.len() != WEEKDAY_COUNT {
        return Err(SettingsError::InvalidValue {
            field: "weekday.cycle".to_string(),
            reason: format!("expected {WEEKDAY_COUNT} glyphs, got {}", raw.len()),
        });
    }
    let mut seen = HashSet::new();
    let mut glyphs = Vec::with_capacity(WEEKDAY_COUNT);
    for entry in raw {
        let mut chars = entry.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(SettingsError::InvalidValue {
                field: "weekday.cycle".to_string(),
                reason: format!("{entry:?} is not a single character"),
            });
        };
        if !seen.insert(ch) {
            return Err(SettingsError::InvalidValue {
                field: "weekday.cycle".to_string(),
                reason: format!("duplicate glyph {ch:?}"),
            });
        }
        glyphs.push(ch);
    }
    Ok(glyphs)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(scan.time_window);
    check_positive_usize!(scan.number_window);

    Ok(())
}
