use std::fs;
use std::path::Path;
use std::process;

use jazh_core::compress::compress;

use crate::unihan::{self, DataLayout, FetchOutcome};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn init(data_dir: &Path) {
    let layout = DataLayout::new(data_dir);
    let config = layout.config_path();
    if config.exists() {
        eprintln!("{} already exists.", config.display());
        return;
    }
    die!(
        fs::create_dir_all(layout.root()),
        "Error creating {}: {}",
        data_dir.display()
    );
    die!(
        fs::write(&config, unihan::default_toml()),
        "Error writing {}: {}",
        config.display()
    );
    eprintln!("Created {}", config.display());
}

pub fn download(data_dir: &Path, url: &str, force: bool) {
    let layout = DataLayout::new(data_dir);
    let archive = layout.archive_path();
    let outcome = die!(
        unihan::download(url, &archive, force),
        "Error downloading Unihan.zip: {}"
    );
    if let FetchOutcome::Downloaded { .. } = outcome {
        eprintln!("Next: unihantool setup");
    }
}

pub fn setup(data_dir: &Path) {
    let layout = DataLayout::new(data_dir);
    let archive = layout.archive_path();
    if !archive.is_file() {
        eprintln!(
            "Error: {} not found. Run `unihantool download` first.",
            archive.display()
        );
        process::exit(1);
    }

    eprintln!("Extracting {}...", archive.display());
    let extracted = die!(
        unihan::extract(&archive, &layout.unzip_dir()),
        "Error extracting archive: {}"
    );
    eprintln!("  ({extracted} files)");

    let table = die!(
        unihan::parse_readings_file(&layout.readings_path()),
        "Error reading Unihan readings: {}"
    );
    eprintln!();
    eprintln!("Reading entries:");
    for (kind, count) in table.counts() {
        let lang = if kind.is_japanese() { "ja" } else { "zh" };
        eprintln!("  {:<14} [{lang}] {count}", kind.property());
    }
    if table.skipped > 0 {
        eprintln!("  (skipped {} malformed lines)", table.skipped);
    }

    let overrides = die!(
        unihan::load_overrides(&layout.config_path()),
        "Error loading overrides: {}"
    );
    let sets = unihan::build_sets(&table, &overrides);
    eprintln!();
    eprintln!("Deduplicated characters:");
    eprintln!("  Japanese {}", sets.japanese.len());
    eprintln!("  Chinese  {}", sets.chinese.len());

    let result_dir = layout.result_dir();
    die!(sets.write(&result_dir), "Error writing pattern files: {}");
    eprintln!("Wrote pattern files to {}", result_dir.display());
}

/// Print the compressed class for the distinct characters of `chars`.
pub fn compress_chars(chars: &str) {
    let mut codes: Vec<u32> = chars.chars().map(u32::from).collect();
    codes.sort_unstable();
    codes.dedup();
    println!("{}", compress(&codes));
}

