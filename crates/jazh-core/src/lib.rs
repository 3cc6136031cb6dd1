//! Character-level Japanese / Chinese script classification.
//!
//! Membership tests are compiled from compressed code-point classes (see
//! [`compress`]) into a [`ScriptMatcherSet`]; [`classify`](classify::classify)
//! partitions text against that set and derives a [`Lang`] verdict.
//! The crate-root functions ([`init`], [`classify`], ...) operate on a
//! process-wide set that matches nothing until [`init`] is called.

pub mod classify;
pub mod compress;
pub mod global;
pub mod script;
pub mod settings;
#[cfg(test)]
pub(crate) mod testutil;
pub mod unicode;

pub use classify::{ClassificationResult, Detection, Lang};
pub use compress::{compress, Run};
pub use global::{
    classify, has_chinese_characters, has_japanese_characters, init, init_with,
    is_chinese_sentence, is_japanese_sentence,
};
pub use script::{MatcherError, ScriptMatcher, ScriptMatcherSet};
