fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    println!("cargo:rerun-if-changed=src/romaji/default_romaji.toml");

    // Validate embedded TOML files at compile time.
    let settings = parse_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    for section in ["scan", "weekday"] {
        require_table("src/default_settings.toml", &settings, section);
    }

    let romaji = parse_toml(
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
    );
    for section in ["small", "contracted", "plain"] {
        let table = require_table("src/romaji/default_romaji.toml", &romaji, section);
        for key in table.keys() {
            if key.is_empty() || key.len() > 4 || !key.bytes().all(|b| b.is_ascii_lowercase()) {
                panic!("src/romaji/default_romaji.toml: bad key [{section}] {key:?}");
            }
        }
    }
}

fn parse_toml(path: &str, content: &str) -> toml::Table {
    content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn require_table<'a>(path: &str, doc: &'a toml::Table, section: &str) -> &'a toml::Table {
    match doc.get(section) {
        Some(toml::Value::Table(t)) => t,
        _ => panic!("{path} is missing the [{section}] table"),
    }
}
