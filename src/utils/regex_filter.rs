//! Helpers for regex proxy patterns such as `(香港|HK)`
//!
//! Formatters use these to turn group members that are patterns into the
//! filter syntax of their target format.

/// Check whether a proxy token is a regex alternation pattern
///
/// # Arguments
///
/// * `s` - The proxy token to check
///
/// # Returns
///
/// True if the trimmed token is at least three characters long, is wrapped
/// in parentheses and contains a `|`
pub fn is_regex_proxy_pattern(s: &str) -> bool {
    let s = s.trim();
    s.len() >= 3 && s.starts_with('(') && s.ends_with(')') && s.contains('|')
}

fn inner_options<S: AsRef<str>>(patterns: &[S]) -> Vec<&str> {
    patterns
        .iter()
        .map(|pattern| {
            let pattern = pattern.as_ref().trim();
            let pattern = pattern.strip_prefix('(').unwrap_or(pattern);
            pattern.strip_suffix(')').unwrap_or(pattern)
        })
        .filter(|inner| !inner.is_empty())
        .collect()
}

/// Merge several `(a|b)` patterns into a single `(a|b|c|d)` pattern
///
/// A single pattern is returned unchanged.
pub fn merge_regex_filters<S: AsRef<str>>(patterns: &[S]) -> String {
    match patterns {
        [] => String::new(),
        [single] => single.as_ref().to_string(),
        _ => format!("({})", inner_options(patterns).join("|")),
    }
}

/// Merge patterns like [`merge_regex_filters`] but without the outer parentheses
pub fn extract_surge_regex_filter<S: AsRef<str>>(patterns: &[S]) -> String {
    inner_options(patterns).join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_regex_proxy_pattern() {
        assert!(is_regex_proxy_pattern("(香港|HK)"));
        assert!(is_regex_proxy_pattern("  (a|b)  "));
        assert!(!is_regex_proxy_pattern("HK"));
        assert!(!is_regex_proxy_pattern("(HK)"));
        assert!(!is_regex_proxy_pattern("(|"));
        assert!(!is_regex_proxy_pattern("a|b"));
    }

    #[test]
    fn test_merge_regex_filters() {
        assert_eq!(
            merge_regex_filters(&["(香港|HK)", "(日本|JP)"]),
            "(香港|HK|日本|JP)"
        );
        assert_eq!(merge_regex_filters(&["(香港|HK)"]), "(香港|HK)");
        assert_eq!(merge_regex_filters::<&str>(&[]), "");
    }

    #[test]
    fn test_extract_surge_regex_filter() {
        assert_eq!(
            extract_surge_regex_filter(&["(香港|HK)", "(日本|JP)"]),
            "香港|HK|日本|JP"
        );
        assert_eq!(extract_surge_regex_filter(&["(美国|US)"]), "美国|US");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let patterns = vec!["(A|B)".to_string(), "(C|D)".to_string()];
        assert_eq!(merge_regex_filters(&patterns), "(A|B|C|D)");
    }
}
