//! Process-wide matcher set behind the crate-root convenience functions.
//!
//! Until [`init`] or [`init_with`] succeeds, every query runs against an empty
//! set and reports nothing. Re-initializing swaps the whole set; a query that
//! already started keeps using the set it began with.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::classify::{self as classifier, ClassificationResult};
use crate::script::{MatcherError, ScriptMatcherSet};

static ACTIVE: RwLock<Option<Arc<ScriptMatcherSet>>> = RwLock::new(None);
static EMPTY: ScriptMatcherSet = ScriptMatcherSet::empty();

/// Load the pattern files from `dir` and make them the active set.
///
/// On error the previously active set (if any) stays in place.
pub fn init(dir: &Path) -> Result<(), MatcherError> {
    let set = ScriptMatcherSet::load(dir)?;
    init_with(set);
    debug!(dir = %dir.display(), "script matchers initialized");
    Ok(())
}

/// Make `set` the active set, replacing any previous one.
pub fn init_with(set: ScriptMatcherSet) {
    let mut guard = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(Arc::new(set));
}

/// Drop the active set; queries match nothing again.
pub fn reset() {
    let mut guard = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

/// The active set, or `None` before initialization.
pub fn active() -> Option<Arc<ScriptMatcherSet>> {
    ACTIVE.read().unwrap_or_else(|e| e.into_inner()).clone()
}

fn with_active<R>(f: impl FnOnce(&ScriptMatcherSet) -> R) -> R {
    match active() {
        Some(set) => f(&set),
        None => f(&EMPTY),
    }
}

pub fn has_japanese_characters(text: &str) -> bool {
    with_active(|set| set.has_japanese_characters(text))
}

pub fn has_chinese_characters(text: &str) -> bool {
    with_active(|set| set.has_chinese_characters(text))
}

pub fn is_japanese_sentence(text: &str) -> bool {
    with_active(|set| classifier::is_japanese_sentence(set, text))
}

pub fn is_chinese_sentence(text: &str) -> bool {
    with_active(|set| classifier::is_chinese_sentence(set, text))
}

pub fn classify(text: &str) -> ClassificationResult {
    with_active(|set| classifier::classify(set, text))
}
