use crate::compress::compress;
use crate::ScriptMatcherSet;

/// Ideographs with a Japanese reading in the test fixture (kana are added by
/// the matcher itself).
pub(crate) const FIXTURE_JAPANESE: &str = "不知道好再里吉芳香環";

/// Ideographs with a Mandarin or Cantonese reading in the test fixture.
pub(crate) const FIXTURE_CHINESE: &str = "不知道你好再见哪里谢吉芳香環";

fn compressed(chars: &str) -> String {
    let mut cps: Vec<u32> = chars.chars().map(u32::from).collect();
    cps.sort_unstable();
    cps.dedup();
    compress(&cps)
}

/// A small matcher set standing in for the full Unihan-derived data.
pub(crate) fn fixture_set() -> ScriptMatcherSet {
    ScriptMatcherSet::from_sources(&compressed(FIXTURE_JAPANESE), &compressed(FIXTURE_CHINESE))
        .unwrap()
}
