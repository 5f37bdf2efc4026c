use regex::RegexBuilder;

/// Whole-word, case-insensitive containment test. The needle is escaped
/// and anchored on word boundaries so "art" does not hit "partner".
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    let trimmed = needle.trim();
    if trimmed.is_empty() {
        return false;
    }

    let pattern = format!(r"\b{}\b", regex::escape(trimmed));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(haystack),
        Err(_) => false,
    }
}

/// Fraction of keywords found in the text, in [0, 1]. An empty keyword
/// list scores 0.0. Keyword order never affects the ratio.
pub fn keyword_ratio(text: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let matched = keywords
        .iter()
        .filter(|keyword| contains_word(text, keyword))
        .count();

    matched as f64 / keywords.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_keyword_list_scores_zero() {
        assert_eq!(keyword_ratio("anything at all", &[]), 0.0);
    }

    #[test]
    fn ratio_counts_matched_over_total() {
        let text = "senior copywriter for email campaigns";
        let keywords = kw(&["copywriter", "email", "design", "video"]);
        assert!((keyword_ratio(text, &keywords) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ratio_is_monotonic_in_matches() {
        let text = "copywriter email newsletter";
        let one = keyword_ratio(text, &kw(&["copywriter", "x", "y"]));
        let two = keyword_ratio(text, &kw(&["copywriter", "email", "y"]));
        let three = keyword_ratio(text, &kw(&["copywriter", "email", "newsletter"]));
        assert!(one < two && two < three);
        assert_eq!(three, 1.0);
    }

    #[test]
    fn matching_respects_word_boundaries() {
        assert!(contains_word("the art department", "art"));
        assert!(!contains_word("our partner network", "art"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(contains_word("SEO Specialist wanted", "seo"));
    }

    #[test]
    fn keyword_order_does_not_change_ratio() {
        let text = "email newsletter copywriter";
        let a = keyword_ratio(text, &kw(&["email", "missing"]));
        let b = keyword_ratio(text, &kw(&["missing", "email"]));
        assert_eq!(a, b);
    }
}
