use std::path::PathBuf;

use clap::{Parser, Subcommand};

use jazh_cli::commands::{config_ops, data_ops, detect_ops};
use jazh_cli::trace_init::init_tracing;
use jazh_cli::unihan::{DEFAULT_DATA_DIR, UNIHAN_URL};

#[derive(Parser)]
#[command(name = "unihantool", about = "Unihan data preparation and script detection")]
struct Cli {
    /// Data directory (config.toml, raw/, result/)
    #[arg(long, global = true, env = "UNIHAN_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Custom matcher settings TOML
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the data directory with an overrides template
    Init,
    /// Download Unihan.zip into raw/
    Download {
        /// Download even if the local copy is up to date
        #[arg(short, long)]
        force: bool,
        /// Archive URL
        #[arg(long, default_value = UNIHAN_URL)]
        url: String,
    },
    /// Extract the archive and write the pattern files into result/
    Setup,
    /// Classify each text with the generated pattern files
    Detect {
        /// Print one JSON object per text
        #[arg(long)]
        json: bool,
        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the compressed character class for the given characters
    Compress {
        /// Characters (order and duplicates do not matter)
        chars: String,
    },
    /// Export the overrides template as TOML
    ConfigExport,
    /// Validate <data-dir>/config.toml
    ConfigValidate,
    /// Export default matcher settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::use_settings(file);
    }

    let data_dir = cli.data_dir.as_path();
    match cli.command {
        Command::Init => data_ops::init(data_dir),
        Command::Download { force, url } => data_ops::download(data_dir, &url, force),
        Command::Setup => data_ops::setup(data_dir),
        Command::Detect { json, texts } => detect_ops::detect(data_dir, &texts, json),
        Command::Compress { chars } => data_ops::compress_chars(&chars),
        Command::ConfigExport => config_ops::config_export(),
        Command::ConfigValidate => config_ops::config_validate(data_dir),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
