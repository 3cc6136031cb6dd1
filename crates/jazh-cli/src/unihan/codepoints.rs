use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use jazh_core::compress::compress;
use jazh_core::settings::settings;

use super::{Overrides, PrepError, ReadingTable};

/// The two deduplicated, ascending code-point lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointSets {
    pub japanese: Vec<u32>,
    pub chinese: Vec<u32>,
}

fn first_codepoint(entry: &str) -> Option<u32> {
    entry.chars().next().map(u32::from)
}

fn apply_overrides(set: &mut BTreeSet<u32>, include: &[String], exclude: &[String]) {
    set.extend(include.iter().filter_map(|s| first_codepoint(s)));
    for cp in exclude.iter().filter_map(|s| first_codepoint(s)) {
        set.remove(&cp);
    }
}

/// Japanese = Kun ∪ On, Chinese = Mandarin ∪ Cantonese, then overrides
/// (Chinese first, excludes after includes).
pub fn build_sets(table: &ReadingTable, overrides: &Overrides) -> CodepointSets {
    let mut japanese: BTreeSet<u32> = table
        .japanese_kun
        .iter()
        .chain(&table.japanese_on)
        .copied()
        .collect();
    let mut chinese: BTreeSet<u32> = table
        .mandarin
        .iter()
        .chain(&table.cantonese)
        .copied()
        .collect();

    apply_overrides(
        &mut chinese,
        &overrides.include_for_zh,
        &overrides.exclude_for_zh,
    );
    apply_overrides(
        &mut japanese,
        &overrides.include_for_ja,
        &overrides.exclude_for_ja,
    );

    CodepointSets {
        japanese: japanese.into_iter().collect(),
        chinese: chinese.into_iter().collect(),
    }
}

impl CodepointSets {
    pub fn japanese_pattern(&self) -> String {
        compress(&self.japanese)
    }

    pub fn chinese_pattern(&self) -> String {
        compress(&self.chinese)
    }

    /// Write both compressed patterns into `dir` under the file names that
    /// `ScriptMatcherSet::load` expects.
    pub fn write(&self, dir: &Path) -> Result<(), PrepError> {
        let data = &settings().data;
        fs::create_dir_all(dir)?;
        fs::write(dir.join(&data.japanese_file), self.japanese_pattern())?;
        fs::write(dir.join(&data.chinese_file), self.chinese_pattern())?;
        Ok(())
    }
}
