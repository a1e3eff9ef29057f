use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_POST_CONTENT: usize = 2000;
pub const MAX_COMMENT_CONTENT: usize = 500;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static NICKNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[가-힣a-zA-Z0-9]+$").unwrap());
static PASSWORD_SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!@#$%^&*]").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Password policy: 8-20 chars, at least one letter, one digit and one
/// special character from !@#$%^&*.
pub fn validate_password(password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if password.is_empty() {
        errors.push("Password is required.".to_string());
        return errors;
    }
    let len = password.chars().count();
    if len < 8 {
        errors.push("Password must be at least 8 characters.".to_string());
    }
    if len > 20 {
        errors.push("Password must be at most 20 characters.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        errors.push("Password must contain at least one letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit.".to_string());
    }
    if !PASSWORD_SPECIAL_RE.is_match(password) {
        errors.push("Password must contain at least one special character (!@#$%^&*).".to_string());
    }
    errors
}

/// Nickname policy: 2-10 chars of Hangul, Latin letters or digits.
pub fn validate_nickname(nickname: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if nickname.is_empty() {
        errors.push("Nickname is required.".to_string());
        return errors;
    }
    let len = nickname.chars().count();
    if len < 2 {
        errors.push("Nickname must be at least 2 characters.".to_string());
    }
    if len > 10 {
        errors.push("Nickname must be at most 10 characters.".to_string());
    }
    if !NICKNAME_RE.is_match(nickname) {
        errors.push("Nickname may only contain Korean, English letters and digits.".to_string());
    }
    errors
}

pub fn validate_post_content(content: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if content.trim().is_empty() {
        errors.push("Content is required.".to_string());
    } else if content.chars().count() > MAX_POST_CONTENT {
        errors.push(format!(
            "Post content may be at most {MAX_POST_CONTENT} characters."
        ));
    }
    errors
}

pub fn validate_rating(rating: i16) -> Vec<String> {
    if (1..=5).contains(&rating) {
        Vec::new()
    } else {
        vec!["Rating must be between 1 and 5.".to_string()]
    }
}

pub fn validate_comment_content(content: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if content.trim().is_empty() {
        errors.push("Comment content is required.".to_string());
    } else if content.chars().count() > MAX_COMMENT_CONTENT {
        errors.push(format!(
            "Comments may be at most {MAX_COMMENT_CONTENT} characters."
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(is_valid_email("reader@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@at@signs.com"));
        assert!(!is_valid_email(""));
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn password_policy() {
        assert!(validate_password("Passw0rd!").is_empty());
        assert!(!validate_password("short1!").is_empty());
        assert!(!validate_password("nodigits!!").is_empty());
        assert!(!validate_password("NoSpecial123").is_empty());
        assert!(!validate_password(&"Aa1!".repeat(6)).is_empty()); // 24 chars
    }

    #[test]
    fn nickname_policy() {
        assert!(validate_nickname("bookworm").is_empty());
        assert!(validate_nickname("책벌레").is_empty());
        assert!(!validate_nickname("a").is_empty());
        assert!(!validate_nickname("way_too_long_name").is_empty());
        assert!(!validate_nickname("spaced out").is_empty());
    }

    #[test]
    fn content_limits() {
        assert!(validate_post_content("a fine review").is_empty());
        assert!(!validate_post_content("").is_empty());
        assert!(!validate_post_content(&"x".repeat(2001)).is_empty());
        assert!(validate_comment_content(&"y".repeat(500)).is_empty());
        assert!(!validate_comment_content(&"y".repeat(501)).is_empty());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_empty());
        assert!(validate_rating(5).is_empty());
        assert!(!validate_rating(0).is_empty());
        assert!(!validate_rating(6).is_empty());
    }
}
