use once_cell::sync::Lazy;
use regex::Regex;

static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([가-힣a-zA-Z0-9_]+)").unwrap());
static HASHTAG_VALID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[가-힣a-zA-Z0-9_]{1,30}$").unwrap());

/// Extract hashtags from post content, without the leading `#`, de-duplicated
/// preserving first occurrence. Tags over 30 chars are dropped.
pub fn extract_hashtags(content: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for cap in HASHTAG_RE.captures_iter(content) {
        let tag = &cap[1];
        if is_valid_hashtag(tag) && !seen.iter().any(|s| s == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}

pub fn is_valid_hashtag(tag: &str) -> bool {
    HASHTAG_VALID_RE.is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_unique_tags_in_order() {
        let tags = extract_hashtags("loved it #scifi #classic some text #scifi");
        assert_eq!(tags, vec!["scifi", "classic"]);
    }

    #[test]
    fn supports_hangul_and_underscore() {
        let tags = extract_hashtags("#한국소설 #long_form");
        assert_eq!(tags, vec!["한국소설", "long_form"]);
    }

    #[test]
    fn ignores_bare_hash_and_overlong_tags() {
        assert!(extract_hashtags("# nothing here").is_empty());
        let long = format!("#{}", "a".repeat(31));
        assert!(extract_hashtags(&long).is_empty());
    }

    #[test]
    fn tag_validity() {
        assert!(is_valid_hashtag("book_club"));
        assert!(!is_valid_hashtag(""));
        assert!(!is_valid_hashtag("has space"));
        assert!(!is_valid_hashtag(&"a".repeat(31)));
    }
}
