//! Unihan data preparation: fetch the archive, extract the readings table,
//! build the Japanese / Chinese code-point sets and write the two compressed
//! pattern files consumed by `jazh_core::init`.

mod codepoints;
mod fetch;
mod overrides;
mod readings;

use std::io;
use std::path::{Path, PathBuf};

pub use codepoints::{build_sets, CodepointSets};
pub use fetch::{download, extract, FetchOutcome, UNIHAN_URL};
pub use overrides::{default_toml, load_overrides, parse_overrides_toml, Overrides};
pub use readings::{parse_readings, parse_readings_file, ReadingKind, ReadingTable};

/// Default data directory when neither `--data-dir` nor `UNIHAN_DATA_DIR` is set.
pub const DEFAULT_DATA_DIR: &str = "./unihan_data";

const ARCHIVE_NAME: &str = "Unihan.zip";
const READINGS_NAME: &str = "Unihan_Readings.txt";
const CONFIG_NAME: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("ZIP error: {0}")]
    Zip(String),

    #[error("config error in {path}: {reason}")]
    Config { path: String, reason: String },
}

/// File layout under the data directory.
///
/// ```text
/// <root>/config.toml
/// <root>/raw/Unihan.zip
/// <root>/raw/Unihan/Unihan_Readings.txt
/// <root>/result/japanese.txt
/// <root>/result/chinese.txt
/// ```
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_NAME)
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("raw")
    }

    pub fn archive_path(&self) -> PathBuf {
        self.raw_dir().join(ARCHIVE_NAME)
    }

    pub fn unzip_dir(&self) -> PathBuf {
        self.raw_dir().join("Unihan")
    }

    pub fn readings_path(&self) -> PathBuf {
        self.unzip_dir().join(READINGS_NAME)
    }

    pub fn result_dir(&self) -> PathBuf {
        self.root.join("result")
    }
}
