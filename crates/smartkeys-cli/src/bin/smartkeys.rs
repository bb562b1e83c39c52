use clap::{Parser, Subcommand};

use smartkeys_cli::commands::{config_ops, convert_ops, edit_ops};

#[derive(Parser)]
#[command(name = "smartkeys", about = "SmartKeys romaji and smart-edit tool")]
struct Cli {
    /// Custom romaji tables TOML to use instead of the built-in ones
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom settings TOML to use instead of the built-in ones
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type romaji through the keyboard engine and print the result
    Convert {
        /// Romaji to convert (reads stdin line by line if omitted)
        input: Vec<String>,
    },

    /// Increment or decrement the number, time or weekday at the caret
    Bump {
        /// Text containing the caret marker
        text: String,
        /// Decrement instead of increment
        #[arg(short, long)]
        decrement: bool,
        /// Number of presses
        #[arg(short = 'n', long, default_value = "1")]
        times: usize,
        /// Character marking the caret in TEXT
        #[arg(long, default_value = "|")]
        caret_marker: char,
    },

    /// Print the built-in romaji tables TOML
    RomajiExport,

    /// Validate a romaji tables TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },

    /// Print the built-in settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref path) = cli.romaji {
        config_ops::romaji_load(path);
    }
    if let Some(ref path) = cli.settings {
        config_ops::settings_load(path);
    }

    match cli.command {
        Command::Convert { input } => convert_ops::convert_cmd(&input),
        Command::Bump {
            text,
            decrement,
            times,
            caret_marker,
        } => edit_ops::bump_cmd(&text, caret_marker, decrement, times),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
