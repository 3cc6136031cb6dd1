use proptest::prelude::*;

use super::*;
use crate::testutil::fixture_set;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn classify_hiragana_only() {
    let result = classify(&fixture_set(), "おはよう");
    assert_eq!(
        result,
        ClassificationResult {
            lang: Lang::Japanese,
            text: "おはよう".to_string(),
            japanese_chars: chars("おはよう"),
            chinese_chars: vec![],
            other_chars: vec![],
        }
    );
}

#[test]
fn classify_chinese_only_keeps_duplicates() {
    let result = classify(&fixture_set(), "谢谢");
    assert_eq!(result.lang, Lang::Chinese);
    assert_eq!(result.chinese_chars, vec!['谢', '谢']);
    assert!(result.japanese_chars.is_empty());
    assert!(result.other_chars.is_empty());
}

#[test]
fn classify_tie_goes_to_chinese() {
    let result = classify(&fixture_set(), "再见");
    assert_eq!(result.lang, Lang::Chinese);
    assert_eq!(result.japanese_chars, vec!['再']);
    assert_eq!(result.chinese_chars, vec!['见']);
    assert!(result.other_chars.is_empty());

    let result = classify(&fixture_set(), "哪里");
    assert_eq!(result.lang, Lang::Chinese);
    assert_eq!(result.japanese_chars, vec!['里']);
    assert_eq!(result.chinese_chars, vec!['哪']);
}

#[test]
fn classify_mixed_sentence() {
    let result = classify(&fixture_set(), "こんにちは。你好");
    assert_eq!(result.lang, Lang::Japanese);
    assert_eq!(result.japanese_chars, chars("こんにちは好"));
    assert_eq!(result.chinese_chars, vec!['你']);
    assert_eq!(result.other_chars, vec!['。']);
}

#[test]
fn classify_latin_is_neither() {
    let result = classify(&fixture_set(), "hello");
    assert_eq!(result.lang, Lang::Neither);
    assert!(result.japanese_chars.is_empty());
    assert!(result.chinese_chars.is_empty());
    assert_eq!(result.other_chars, chars("hello"));
}

#[test]
fn classify_shared_ideographs_are_japanese() {
    let set = fixture_set();
    for text in ["不知道", "吉", "芳香環"] {
        let result = classify(&set, text);
        assert_eq!(result.lang, Lang::Japanese, "{text}");
        assert_eq!(result.japanese_chars, chars(text), "{text}");
        assert!(result.chinese_chars.is_empty(), "{text}");
    }
}

#[test]
fn classify_empty_text() {
    let result = classify(&fixture_set(), "");
    assert_eq!(result.lang, Lang::Neither);
    assert_eq!(result.unit_count(), 0);
}

#[test]
fn classify_before_data_matches_nothing() {
    let result = classify(&ScriptMatcherSet::empty(), "おはよう");
    assert_eq!(result.lang, Lang::Neither);
    assert_eq!(result.other_chars, chars("おはよう"));
}

#[test]
fn classify_astral_character_is_one_unit() {
    let result = classify(&fixture_set(), "𠮷a");
    assert_eq!(result.unit_count(), 2);
    assert_eq!(result.other_chars, vec!['𠮷', 'a']);
}

#[test]
fn verdict_rules() {
    assert_eq!(verdict(0, 0), Lang::Neither);
    assert_eq!(verdict(1, 0), Lang::Japanese);
    assert_eq!(verdict(0, 1), Lang::Chinese);
    assert_eq!(verdict(2, 2), Lang::Chinese);
    assert_eq!(verdict(6, 1), Lang::Japanese);
    assert_eq!(verdict(1, 3), Lang::Chinese);
}

#[test]
fn sentence_predicates() {
    let set = fixture_set();
    assert!(set.is_japanese_sentence("不知道"));
    assert!(set.is_japanese_sentence("こんにちは。你好"));
    assert!(!set.is_japanese_sentence("再见"));
    assert!(!set.is_japanese_sentence("hello"));
    assert!(!set.is_japanese_sentence("谢谢"));

    assert!(set.is_chinese_sentence("再见"));
    assert!(set.is_chinese_sentence("谢谢"));
    assert!(!set.is_chinese_sentence("こんにちは。你好"));
    assert!(!set.is_chinese_sentence("吉"));
    assert!(!set.is_chinese_sentence("おはよう"));
}

#[test]
fn character_and_sentence_judgments_differ() {
    // 吉 has both readings: present as Chinese, but the sentence is Japanese.
    let set = fixture_set();
    assert!(set.has_chinese_characters("吉"));
    assert!(!set.is_chinese_sentence("吉"));
    assert!(set.has_chinese_characters("不知道"));
    assert!(set.has_japanese_characters("不知道"));
}

#[test]
fn detection_wraps_one_classification() {
    let set = fixture_set();
    let d = Detection::new(&set, "こんにちは。你好");
    assert!(d.has_japanese_characters);
    assert!(d.has_chinese_characters);
    assert!(d.is_japanese_sentence);
    assert!(!d.is_chinese_sentence);
    assert_eq!(d.japanese_chars(), chars("こんにちは好").as_slice());
    assert_eq!(d.chinese_chars(), &['你']);
    assert_eq!(d.result, classify(&set, "こんにちは。你好"));

    let d = Detection::new(&set, "谢谢");
    assert!(!d.has_japanese_characters);
    assert!(d.is_chinese_sentence);
}

#[test]
fn result_serializes_with_lang_codes() {
    let result = classify(&fixture_set(), "再见");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["lang"], "ZH");
    assert_eq!(json["japanese_chars"], serde_json::json!(["再"]));
    assert_eq!(json["chinese_chars"], serde_json::json!(["见"]));
    assert_eq!(json["other_chars"], serde_json::json!([]));
    assert_eq!(Lang::Neither.to_string(), "NONE");
}

proptest! {
    #[test]
    fn partition_covers_every_character(text in "[a-z。、おはようアイウ不知道你好再见谢吉𠮷 ]{0,40}") {
        let set = fixture_set();
        let result = classify(&set, &text);
        prop_assert_eq!(result.unit_count(), text.chars().count());
        prop_assert!(result.chinese_chars.iter().all(|&c| !set.test_japanese(c)));
        prop_assert!(result.other_chars.iter().all(|&c| !set.test_japanese(c) && !set.test_chinese(c)));
        prop_assert_eq!(result.lang, verdict(result.japanese_chars.len(), result.chinese_chars.len()));
    }
}
