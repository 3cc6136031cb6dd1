use std::fs;
use std::path::Path;
use std::process;

use jazh_core::settings;

use crate::unihan::{self, DataLayout};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before anything reads the settings.
pub fn use_settings(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    die!(settings::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading {}: {}",
        file.display()
    );
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: matcher.case_insensitive={}, data.japanese_file={}, data.chinese_file={}",
        s.matcher.case_insensitive, s.data.japanese_file, s.data.chinese_file
    );
}

pub fn config_export() {
    print!("{}", unihan::default_toml());
}

pub fn config_validate(data_dir: &Path) {
    let path = DataLayout::new(data_dir).config_path();
    if !path.is_file() {
        eprintln!("Error: {} not found. Run `unihantool init` first.", path.display());
        process::exit(1);
    }
    let overrides = die!(unihan::load_overrides(&path), "Error: {}");
    println!(
        "OK: ja +{} -{}, zh +{} -{}",
        overrides.include_for_ja.len(),
        overrides.exclude_for_ja.len(),
        overrides.include_for_zh.len(),
        overrides.exclude_for_zh.len()
    );
}
