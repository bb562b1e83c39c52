use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::config::{parse_romaji_toml, RomajiConfigError, MAX_KEY_LEN};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Arc<RomajiTables>> = OnceLock::new();

/// Table classes in lookup precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableClass {
    Small,
    Contracted,
    Plain,
}

impl TableClass {
    pub const ORDER: [TableClass; 3] = [Self::Small, Self::Contracted, Self::Plain];
}

/// A table hit against the tail of the pending input.
#[derive(Debug, PartialEq, Eq)]
pub struct SuffixMatch<'a> {
    /// Number of trailing letters the key covers.
    pub len: usize,
    pub kana: &'a str,
    pub class: TableClass,
}

#[derive(Debug)]
pub struct RomajiTables {
    small: HashMap<String, String>,
    contracted: HashMap<String, String>,
    plain: HashMap<String, String>,
}

impl RomajiTables {
    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let maps = parse_romaji_toml(toml_str)?;
        Ok(Self {
            small: maps.small,
            contracted: maps.contracted,
            plain: maps.plain,
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(RomajiConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global tables.
    pub fn global() -> Arc<RomajiTables> {
        INSTANCE
            .get_or_init(|| {
                let toml_str = CUSTOM_TOML
                    .get()
                    .map(|s| s.as_str())
                    .unwrap_or(DEFAULT_TOML);
                let tables = RomajiTables::from_toml(toml_str).expect("romaji TOML must be valid");
                tracing::debug!(
                    small = tables.small.len(),
                    contracted = tables.contracted.len(),
                    plain = tables.plain.len(),
                    custom = CUSTOM_TOML.get().is_some(),
                    "romaji tables loaded"
                );
                Arc::new(tables)
            })
            .clone()
    }

    fn table(&self, class: TableClass) -> &HashMap<String, String> {
        match class {
            TableClass::Small => &self.small,
            TableClass::Contracted => &self.contracted,
            TableClass::Plain => &self.plain,
        }
    }

    pub fn get(&self, class: TableClass, key: &str) -> Option<&str> {
        self.table(class).get(key).map(|s| s.as_str())
    }

    /// Find the longest table key that is a suffix of `input`.
    ///
    /// Lengths are tried from [`MAX_KEY_LEN`] down to 1; at each length the
    /// classes are tried in [`TableClass::ORDER`].
    pub fn longest_suffix_match(&self, input: &[char]) -> Option<SuffixMatch<'_>> {
        for len in (1..=MAX_KEY_LEN).rev() {
            if input.len() < len {
                continue;
            }
            let key: String = input[input.len() - len..].iter().collect();
            for class in TableClass::ORDER {
                if let Some(kana) = self.get(class, &key) {
                    return Some(SuffixMatch { len, kana, class });
                }
            }
        }
        None
    }
}
