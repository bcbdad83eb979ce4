//! Theme normalization
//!
//! Turns the raw free-text `theme` argument into lowercase keywords, or the
//! "no filter requested" sentinel when the theme is empty or whitespace.

/// Outcome of normalizing a raw theme string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeQuery {
    /// Empty or whitespace-only theme: return every record unfiltered.
    All,
    /// One or more lowercase keywords split from the theme text.
    Keywords(Vec<String>),
}

/// Normalize a raw theme string into a query.
///
/// Trims surrounding whitespace, replaces full-width spaces (U+3000) with
/// regular spaces, lowercases, and splits on whitespace. If splitting yields
/// no tokens the whole normalized string is used as a single keyword.
pub fn normalize_theme(raw: &str) -> ThemeQuery {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ThemeQuery::All;
    }

    let normalized = trimmed.replace('\u{3000}', " ").to_lowercase();
    let keywords: Vec<String> = normalized
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        // Unreachable for ordinary input since trim and split agree on what
        // whitespace is, but the single-keyword fallback is part of the
        // normalizer's contract.
        ThemeQuery::Keywords(vec![normalized])
    } else {
        ThemeQuery::Keywords(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_theme_requests_everything() {
        assert_eq!(normalize_theme(""), ThemeQuery::All);
    }

    #[test]
    fn test_whitespace_only_theme_requests_everything() {
        assert_eq!(normalize_theme("   "), ThemeQuery::All);
        assert_eq!(normalize_theme("\t\n"), ThemeQuery::All);
        // U+3000 is whitespace too
        assert_eq!(normalize_theme("\u{3000}\u{3000}"), ThemeQuery::All);
    }

    #[test]
    fn test_single_keyword() {
        assert_eq!(
            normalize_theme("perseverance"),
            ThemeQuery::Keywords(vec!["perseverance".to_string()])
        );
    }

    #[test]
    fn test_keywords_are_lowercased() {
        assert_eq!(
            normalize_theme("Leadership"),
            ThemeQuery::Keywords(vec!["leadership".to_string()])
        );
        assert_eq!(
            normalize_theme("RISK Taking"),
            ThemeQuery::Keywords(vec!["risk".to_string(), "taking".to_string()])
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            normalize_theme("  career \n"),
            ThemeQuery::Keywords(vec!["career".to_string()])
        );
    }

    #[test]
    fn test_full_width_space_separates_keywords() {
        assert_eq!(
            normalize_theme("leadership\u{3000}team"),
            ThemeQuery::Keywords(vec!["leadership".to_string(), "team".to_string()])
        );
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            normalize_theme("a\u{3000} b  c"),
            ThemeQuery::Keywords(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ])
        );
    }

    #[test]
    fn test_non_ascii_theme_passes_through() {
        assert_eq!(
            normalize_theme("仕事"),
            ThemeQuery::Keywords(vec!["仕事".to_string()])
        );
    }
}
