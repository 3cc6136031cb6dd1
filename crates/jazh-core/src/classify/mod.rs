//! Partitioning text into Japanese, Chinese and other characters.
//!
//! Every character of the input lands in exactly one of the three output
//! lists, in input order. A character matching both classes is Japanese.
//! The verdict compares the two counts; a tie between nonzero counts is
//! Chinese.

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::script::ScriptMatcherSet;

/// Overall verdict for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lang {
    #[serde(rename = "JA")]
    Japanese,
    #[serde(rename = "ZH")]
    Chinese,
    #[serde(rename = "NONE")]
    Neither,
}

impl Lang {
    pub const fn code(self) -> &'static str {
        match self {
            Lang::Japanese => "JA",
            Lang::Chinese => "ZH",
            Lang::Neither => "NONE",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub lang: Lang,
    pub text: String,
    pub japanese_chars: Vec<char>,
    pub chinese_chars: Vec<char>,
    pub other_chars: Vec<char>,
}

impl ClassificationResult {
    /// Total number of characters across the three lists; always equal to
    /// `text.chars().count()`.
    pub fn unit_count(&self) -> usize {
        self.japanese_chars.len() + self.chinese_chars.len() + self.other_chars.len()
    }
}

/// Verdict from the per-script counts.
pub fn verdict(japanese: usize, chinese: usize) -> Lang {
    if japanese > chinese {
        Lang::Japanese
    } else if chinese > 0 {
        Lang::Chinese
    } else {
        Lang::Neither
    }
}

/// Partition `text` in one pass and compute its verdict.
pub fn classify(set: &ScriptMatcherSet, text: &str) -> ClassificationResult {
    let _span = debug_span!("classify", bytes = text.len()).entered();

    let mut japanese_chars = Vec::new();
    let mut chinese_chars = Vec::new();
    let mut other_chars = Vec::new();
    for c in text.chars() {
        if set.test_japanese(c) {
            japanese_chars.push(c);
        } else if set.test_chinese(c) {
            chinese_chars.push(c);
        } else {
            other_chars.push(c);
        }
    }

    let lang = verdict(japanese_chars.len(), chinese_chars.len());
    debug!(
        japanese = japanese_chars.len(),
        chinese = chinese_chars.len(),
        other = other_chars.len(),
        %lang
    );

    ClassificationResult {
        lang,
        text: text.to_string(),
        japanese_chars,
        chinese_chars,
        other_chars,
    }
}

pub fn is_japanese_sentence(set: &ScriptMatcherSet, text: &str) -> bool {
    classify(set, text).lang == Lang::Japanese
}

pub fn is_chinese_sentence(set: &ScriptMatcherSet, text: &str) -> bool {
    classify(set, text).lang == Lang::Chinese
}

impl ScriptMatcherSet {
    pub fn classify(&self, text: &str) -> ClassificationResult {
        classify(self, text)
    }

    pub fn is_japanese_sentence(&self, text: &str) -> bool {
        is_japanese_sentence(self, text)
    }

    pub fn is_chinese_sentence(&self, text: &str) -> bool {
        is_chinese_sentence(self, text)
    }
}

/// Every judgment about one text, computed up front.
///
/// The sentence flags come from a single [`classify`] call; the character
/// flags test the whole text against each class, so a text can have Chinese
/// characters and still be a Japanese sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub has_japanese_characters: bool,
    pub has_chinese_characters: bool,
    pub is_japanese_sentence: bool,
    pub is_chinese_sentence: bool,
    pub result: ClassificationResult,
}

impl Detection {
    pub fn new(set: &ScriptMatcherSet, text: &str) -> Self {
        let result = classify(set, text);
        Self {
            has_japanese_characters: set.has_japanese_characters(text),
            has_chinese_characters: set.has_chinese_characters(text),
            is_japanese_sentence: result.lang == Lang::Japanese,
            is_chinese_sentence: result.lang == Lang::Chinese,
            result,
        }
    }

    pub fn japanese_chars(&self) -> &[char] {
        &self.result.japanese_chars
    }

    pub fn chinese_chars(&self) -> &[char] {
        &self.result.chinese_chars
    }
}
