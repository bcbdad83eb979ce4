//! Theme filter behavior tests
//!
//! Tests focus on the documented filtering contract over the real datasets:
//! empty themes are identity, matching is case-insensitive, order is
//! preserved, and an unmatched theme falls back to the full dataset.

use kotowaza::catalog::{
    filter_records, normalize_theme, record_matches, ThemeQuery, ALL_DATASETS,
    GLOBAL_PROVERB_SET, JAPANESE_PROVERB_SET, YOJIJUKUGO_SET,
};
use proptest::prelude::*;

#[test]
fn test_empty_theme_is_identity_on_every_dataset() {
    for dataset in ALL_DATASETS {
        let result = filter_records(dataset.records, "");
        assert_eq!(result.count, dataset.records.len());
        for (item, record) in result.items.iter().zip(dataset.records.iter()) {
            assert_eq!(item.text, record.text);
        }
    }
}

#[test]
fn test_whitespace_only_theme_is_identity() {
    let result = filter_records(JAPANESE_PROVERB_SET.records, " \t\u{3000} ");
    assert_eq!(result.count, 25);
}

#[test]
fn test_theme_tag_selects_exact_record() {
    let result = filter_records(JAPANESE_PROVERB_SET.records, "prioritization");
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].text, "二兎を追う者は一兎をも得ず");
}

#[test]
fn test_unmatched_theme_falls_back_to_full_dataset() {
    for dataset in ALL_DATASETS {
        let result = filter_records(dataset.records, "zzz_no_such_tag");
        assert_eq!(result.count, dataset.records.len());
    }
}

#[test]
fn test_matching_is_case_insensitive() {
    let upper = filter_records(JAPANESE_PROVERB_SET.records, "PRIORITIZATION");
    let lower = filter_records(JAPANESE_PROVERB_SET.records, "prioritization");
    assert_eq!(upper, lower);
}

#[test]
fn test_full_width_space_separates_keywords() {
    // "leadership" tags 3 records, "team" tags 4 others; the union keeps
    // dataset order
    let result = filter_records(JAPANESE_PROVERB_SET.records, "leadership\u{3000}team");
    assert_eq!(result.count, 7);

    let texts: Vec<&str> = result.items.iter().map(|r| r.text).collect();
    assert_eq!(
        texts,
        vec![
            "初心忘るべからず",
            "情けは人の為ならず",
            "雨降って地固まる",
            "灯台下暗し",
            "馬の耳に念仏",
            "船頭多くして船山に登る",
            "短気は損気",
        ]
    );

    // Strictly filtered, not the fallback
    assert!(result.count < JAPANESE_PROVERB_SET.records.len());
}

#[test]
fn test_reading_field_is_searchable() {
    let result = filter_records(JAPANESE_PROVERB_SET.records, "ななころびやおき");
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].text, "七転び八起き");
}

#[test]
fn test_origin_field_is_searchable() {
    let result = filter_records(GLOBAL_PROVERB_SET.records, "haitian");
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].text, "Little by little, the bird builds its nest");
}

#[test]
fn test_japanese_meaning_is_searchable() {
    // The idiom meanings are Japanese prose
    let result = filter_records(YOJIJUKUGO_SET.records, "孤立");
    assert_eq!(result.count, 1);
    assert_eq!(result.items[0].text, "四面楚歌");
}

proptest! {
    #[test]
    fn filter_never_returns_empty(theme in ".*") {
        for dataset in ALL_DATASETS {
            let result = filter_records(dataset.records, &theme);
            prop_assert!(result.count > 0, "empty result for theme {:?}", theme);
        }
    }

    #[test]
    fn count_always_equals_items_len(theme in ".*") {
        let result = filter_records(JAPANESE_PROVERB_SET.records, &theme);
        prop_assert_eq!(result.count, result.items.len());
    }

    #[test]
    fn whitespace_themes_are_identity(theme in "[ \t\u{3000}]{0,8}") {
        let result = filter_records(GLOBAL_PROVERB_SET.records, &theme);
        prop_assert_eq!(result.count, GLOBAL_PROVERB_SET.records.len());
    }

    #[test]
    fn uppercase_theme_selects_same_records(theme in "[a-z0-9 \u{3000}]{0,30}") {
        let lower = filter_records(JAPANESE_PROVERB_SET.records, &theme);
        let upper = filter_records(JAPANESE_PROVERB_SET.records, &theme.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn result_is_either_matches_or_fallback(theme in "[a-z ]{1,20}") {
        let result = filter_records(JAPANESE_PROVERB_SET.records, &theme);
        match normalize_theme(&theme) {
            ThemeQuery::All => prop_assert_eq!(result.count, 25),
            ThemeQuery::Keywords(keywords) => {
                let any_match = result.items.iter().any(|r| record_matches(r, &keywords));
                if result.count < 25 {
                    // Strict filter: every returned record matches
                    prop_assert!(result.items.iter().all(|r| record_matches(r, &keywords)));
                } else if !any_match {
                    // Fallback: the full dataset came back despite no matches
                    prop_assert_eq!(result.count, 25);
                }
            }
        }
    }
}
