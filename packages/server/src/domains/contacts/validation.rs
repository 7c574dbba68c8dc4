use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Local part in dot-separated groups of [A-Za-z0-9_-]; domain must
    // not start with '-'; final label is two or more letters. The
    // 64-char local-part bound is checked separately since the regex
    // crate has no lookahead.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@[^-][A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(\.[A-Za-z]{2,})$"
    ).unwrap();

    // Optional leading '+', then one or more digits or hyphens
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9-]+$").unwrap();
}

/// Syntactic email check
///
/// The local part (everything before the first '@') is capped at 64
/// characters. Empty strings are invalid.
pub fn is_valid_email(email: &str) -> bool {
    match email.find('@') {
        Some(at) if (1..=64).contains(&at) => EMAIL_REGEX.is_match(email),
        _ => false,
    }
}

/// Syntactic phone number check. Empty strings are invalid.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("example1@example.com"));
        assert!(is_valid_email("first.last@example.com"));
        assert!(is_valid_email("user_name-1@sub.example.org"));
        assert!(is_valid_email("a@example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("example1example.com")); // no '@'
        assert!(!is_valid_email("username@.com")); // empty first label
        assert!(!is_valid_email("@example.com")); // empty local part
        assert!(!is_valid_email("user@-example.com")); // domain starts with '-'
        assert!(!is_valid_email("user@example")); // no TLD
        assert!(!is_valid_email("user@example.c")); // TLD too short
        assert!(!is_valid_email("us er@example.com")); // space in local part
        assert!(!is_valid_email("user..name@example.com")); // empty local group
    }

    #[test]
    fn test_local_part_length_bound() {
        let local_64 = "a".repeat(64);
        let local_65 = "a".repeat(65);
        assert!(is_valid_email(&format!("{local_64}@example.com")));
        assert!(!is_valid_email(&format!("{local_65}@example.com")));
    }

    #[test]
    fn test_valid_phone_numbers() {
        assert!(is_valid_phone_number("123456789"));
        assert!(is_valid_phone_number("+123456789"));
        assert!(is_valid_phone_number("123-456-789"));
        assert!(is_valid_phone_number("+1-234-567"));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("12345678s"));
        assert!(!is_valid_phone_number("+"));
        assert!(!is_valid_phone_number("123+456"));
        assert!(!is_valid_phone_number("123 456"));
    }
}
