use std::fs;
use std::path::Path;

use tracing::debug;

use super::PrepError;

/// The reading properties of `Unihan_Readings.txt` that feed the two sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingKind {
    JapaneseKun,
    JapaneseOn,
    Mandarin,
    Cantonese,
}

impl ReadingKind {
    pub const ALL: [ReadingKind; 4] = [
        ReadingKind::JapaneseKun,
        ReadingKind::JapaneseOn,
        ReadingKind::Mandarin,
        ReadingKind::Cantonese,
    ];

    pub fn from_property(name: &str) -> Option<Self> {
        match name {
            "kJapaneseKun" => Some(Self::JapaneseKun),
            "kJapaneseOn" => Some(Self::JapaneseOn),
            "kMandarin" => Some(Self::Mandarin),
            "kCantonese" => Some(Self::Cantonese),
            _ => None,
        }
    }

    pub fn property(self) -> &'static str {
        match self {
            Self::JapaneseKun => "kJapaneseKun",
            Self::JapaneseOn => "kJapaneseOn",
            Self::Mandarin => "kMandarin",
            Self::Cantonese => "kCantonese",
        }
    }

    pub fn is_japanese(self) -> bool {
        matches!(self, Self::JapaneseKun | Self::JapaneseOn)
    }
}

/// Code points per reading property, in file order (not deduplicated).
#[derive(Debug, Default, Clone)]
pub struct ReadingTable {
    pub japanese_kun: Vec<u32>,
    pub japanese_on: Vec<u32>,
    pub mandarin: Vec<u32>,
    pub cantonese: Vec<u32>,
    /// Lines with a wanted property but an unparseable code point.
    pub skipped: usize,
}

impl ReadingTable {
    pub fn get(&self, kind: ReadingKind) -> &[u32] {
        match kind {
            ReadingKind::JapaneseKun => &self.japanese_kun,
            ReadingKind::JapaneseOn => &self.japanese_on,
            ReadingKind::Mandarin => &self.mandarin,
            ReadingKind::Cantonese => &self.cantonese,
        }
    }

    fn get_mut(&mut self, kind: ReadingKind) -> &mut Vec<u32> {
        match kind {
            ReadingKind::JapaneseKun => &mut self.japanese_kun,
            ReadingKind::JapaneseOn => &mut self.japanese_on,
            ReadingKind::Mandarin => &mut self.mandarin,
            ReadingKind::Cantonese => &mut self.cantonese,
        }
    }

    /// `(kind, count)` for each property, for the extraction log.
    pub fn counts(&self) -> [(ReadingKind, usize); 4] {
        ReadingKind::ALL.map(|kind| (kind, self.get(kind).len()))
    }
}

/// Parse `U+4E00` style code points.
fn parse_codepoint(field: &str) -> Option<u32> {
    let hex = field.strip_prefix("U+")?;
    let cp = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(cp).map(u32::from)
}

/// Parse the tab-separated `code<TAB>property<TAB>value` lines of
/// `Unihan_Readings.txt`. Comments, blank lines and other properties are ignored.
pub fn parse_readings(content: &str) -> ReadingTable {
    let mut table = ReadingTable::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(code), Some(property)) = (fields.next(), fields.next()) else {
            continue;
        };
        let Some(kind) = ReadingKind::from_property(property) else {
            continue;
        };
        match parse_codepoint(code) {
            Some(cp) => table.get_mut(kind).push(cp),
            None => table.skipped += 1,
        }
    }
    table
}

pub fn parse_readings_file(path: &Path) -> Result<ReadingTable, PrepError> {
    if !path.is_file() {
        return Err(PrepError::Parse(format!(
            "{} not found; run `unihantool download` and `unihantool setup` again",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let table = parse_readings(&content);
    debug!(path = %path.display(), skipped = table.skipped, "parsed readings");
    Ok(table)
}
