//! Compiled Japanese / Chinese membership tests.
//!
//! A [`ScriptMatcherSet`] holds one character-class matcher per script.
//! It is built once (from pattern files or in-memory sources) and then shared
//! by reference; nothing in it is mutated after construction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use tracing::{debug, debug_span};

use crate::settings::{settings, MatcherSettings};
use crate::unicode::KANA_CLASS;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("pattern source does not compile: {0}")]
    Pattern(#[from] regex::Error),
}

impl MatcherError {
    /// The underlying read error, if this is a file failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Pattern(_) => None,
        }
    }
}

/// A single compiled character class. The empty matcher matches nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptMatcher {
    regex: Option<Regex>,
}

impl ScriptMatcher {
    pub const fn empty() -> Self {
        Self { regex: None }
    }

    /// Compile `[source]`. An empty source yields the empty matcher.
    ///
    /// The source is not checked against the code points it was built from;
    /// a corrupted but syntactically valid source silently matches the wrong
    /// characters.
    pub fn compile(source: &str, options: &MatcherSettings) -> Result<Self, MatcherError> {
        if source.is_empty() {
            return Ok(Self::empty());
        }
        let regex = RegexBuilder::new(&format!("[{source}]"))
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .unicode(true)
            .size_limit(options.size_limit)
            .dfa_size_limit(options.dfa_size_limit)
            .build()?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Whether the single unit `c` belongs to the class.
    pub fn test(&self, c: char) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        let mut buf = [0u8; 4];
        regex.is_match(c.encode_utf8(&mut buf))
    }

    /// Whether any unit of `text` belongs to the class.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }
}

/// The Japanese and Chinese matchers used by the classifier.
#[derive(Debug, Clone, Default)]
pub struct ScriptMatcherSet {
    japanese: ScriptMatcher,
    chinese: ScriptMatcher,
}

impl ScriptMatcherSet {
    /// A set that matches nothing, the state before any data is loaded.
    pub const fn empty() -> Self {
        Self {
            japanese: ScriptMatcher::empty(),
            chinese: ScriptMatcher::empty(),
        }
    }

    /// Build from compressed sources using the global matcher settings.
    pub fn from_sources(japanese: &str, chinese: &str) -> Result<Self, MatcherError> {
        Self::from_sources_with(japanese, chinese, &settings().matcher)
    }

    /// Build from compressed sources. The kana blocks are always appended to
    /// the Japanese class.
    pub fn from_sources_with(
        japanese: &str,
        chinese: &str,
        options: &MatcherSettings,
    ) -> Result<Self, MatcherError> {
        let _span = debug_span!("compile_matchers").entered();
        let japanese_source = format!("{japanese}{KANA_CLASS}");
        let set = Self {
            japanese: ScriptMatcher::compile(&japanese_source, options)?,
            chinese: ScriptMatcher::compile(chinese, options)?,
        };
        debug!(
            japanese_len = japanese_source.len(),
            chinese_len = chinese.len(),
            "compiled script matchers"
        );
        Ok(set)
    }

    /// Load the two pattern files from `dir` (names from `settings().data`).
    ///
    /// A missing or unreadable file is returned as [`MatcherError::Io`]; there
    /// is no fallback to an empty set.
    pub fn load(dir: &Path) -> Result<Self, MatcherError> {
        let data = &settings().data;
        let japanese = read_source(&dir.join(&data.japanese_file))?;
        let chinese = read_source(&dir.join(&data.chinese_file))?;
        Self::from_sources(&japanese, &chinese)
    }

    pub fn japanese(&self) -> &ScriptMatcher {
        &self.japanese
    }

    pub fn chinese(&self) -> &ScriptMatcher {
        &self.chinese
    }

    pub fn test_japanese(&self, c: char) -> bool {
        self.japanese.test(c)
    }

    pub fn test_chinese(&self, c: char) -> bool {
        self.chinese.test(c)
    }

    /// Whether any character of `text` is in the Japanese class.
    pub fn has_japanese_characters(&self, text: &str) -> bool {
        self.japanese.is_match(text)
    }

    /// Whether any character of `text` is in the Chinese class.
    pub fn has_chinese_characters(&self, text: &str) -> bool {
        self.chinese.is_match(text)
    }
}

/// Read a pattern file: surrounding whitespace trimmed, first line only.
fn read_source(path: &Path) -> Result<String, MatcherError> {
    let content = fs::read_to_string(path).map_err(|source| MatcherError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let line = content.trim().lines().next().unwrap_or_default();
    debug!(path = %path.display(), len = line.len(), "read pattern source");
    Ok(line.to_string())
}
