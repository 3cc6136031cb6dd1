//! Native syllabary blocks that are always classified as Japanese.

/// Character-class source for the Hiragana (U+3040..U+309F) and Katakana
/// (U+30A0..U+30FF) blocks, appended to the Japanese pattern as-is. The
/// unassigned U+3040 and U+3097-3098 are included so each block is one range.
pub const KANA_CLASS: &str = "\\u3040-\\u309f\\u30a0-\\u30ff";
