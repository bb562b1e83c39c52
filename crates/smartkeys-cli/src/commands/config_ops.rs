use std::fs;

use smartkeys_core::romaji::{parse_romaji_toml, RomajiTables};
use smartkeys_core::settings::{self, parse_settings_toml};

use super::die;

pub fn romaji_export() {
    print!("{}", smartkeys_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let maps = die!(parse_romaji_toml(&content), "Error: {}");
    println!(
        "OK: {} mappings (small={}, contracted={}, plain={})",
        maps.len(),
        maps.small.len(),
        maps.contracted.len(),
        maps.plain.len()
    );
}

/// Install custom romaji tables before anything touches the global ones.
pub fn romaji_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(RomajiTables::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    let cycle: String = s.weekday_glyphs().iter().collect();
    println!(
        "OK: scan.time_window={}, scan.number_window={}, weekday.cycle={}",
        s.scan.time_window, s.scan.number_window, cycle
    );
}

/// Install custom settings before anything touches the global ones.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error: {}");
}
