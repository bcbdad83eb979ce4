//! Record matching and dataset filtering
//!
//! A record matches when any keyword occurs as a substring of any of its
//! case-folded searchable fields. Filtering preserves curated order and
//! falls back to the full dataset when nothing matches: the tools always
//! return something useful rather than an empty list.

use tracing::debug;

use crate::catalog::record::Record;
use crate::catalog::theme::{normalize_theme, ThemeQuery};

/// Result of a dataset lookup: matching records (or the whole dataset) in
/// curated order, plus their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult<'a> {
    pub items: Vec<&'a Record>,
    pub count: usize,
}

impl<'a> LookupResult<'a> {
    fn all(records: &'a [Record]) -> Self {
        Self {
            items: records.iter().collect(),
            count: records.len(),
        }
    }

    fn matched(items: Vec<&'a Record>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// True if any non-empty keyword occurs in the case-folded text.
fn keyword_hit(text: &str, keywords: &[String]) -> bool {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && lowered.contains(keyword.as_str()))
}

/// True if the record matches any keyword in any searchable field.
///
/// Searchable fields are the primary text, reading, meaning, space-joined
/// themes, origin, and usage hint; absent optional fields never match.
pub fn record_matches(record: &Record, keywords: &[String]) -> bool {
    let joined_themes = record.themes.join(" ");
    let haystacks = [
        Some(record.text),
        record.reading,
        Some(record.meaning),
        Some(joined_themes.as_str()),
        record.origin,
        Some(record.usage_hint),
    ];

    let matched = haystacks
        .into_iter()
        .flatten()
        .any(|haystack| keyword_hit(haystack, keywords));
    matched
}

/// Filter a dataset by a raw theme string.
///
/// An empty or whitespace-only theme returns the full dataset. Otherwise
/// records matching any keyword are returned in original order; if none
/// match, the full dataset is returned instead. Any input yields a
/// non-empty result for a non-empty dataset.
pub fn filter_records<'a>(records: &'a [Record], theme: &str) -> LookupResult<'a> {
    let keywords = match normalize_theme(theme) {
        ThemeQuery::All => return LookupResult::all(records),
        ThemeQuery::Keywords(keywords) => keywords,
    };

    let matched: Vec<&Record> = records
        .iter()
        .filter(|record| record_matches(record, &keywords))
        .collect();

    if matched.is_empty() {
        debug!(
            keywords = keywords.len(),
            "no records matched theme, returning full dataset"
        );
        LookupResult::all(records)
    } else {
        LookupResult::matched(matched)
    }
}
