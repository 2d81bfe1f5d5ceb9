//! Field validation shared by the form endpoints.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` with no whitespace and no second `@`.
static EMAIL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Optional `+`, a digit 1-9, then up to 15 ASCII digits.
static PHONE_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+]?[1-9][0-9]{0,15}$").ok());

/// Checks `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with text on both sides.
///
/// # Returns
///
/// `true` if `email` matches the pattern. Always `false` if the pattern failed
/// to compile.
///
/// ```
/// use tourfinder::api::is_valid_email;
///
/// assert!(is_valid_email("guest@example.com"));
/// assert!(!is_valid_email("guest@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(email))
}

/// Checks an optional `+`, a digit 1-9, then up to 15 more digits.
///
/// Only ASCII digits count; spaces, dashes and other separators are rejected.
///
/// ```
/// use tourfinder::api::is_valid_phone;
///
/// assert!(is_valid_phone("+8801704439665"));
/// assert!(!is_valid_phone("01704439665"));
/// ```
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.as_ref().is_some_and(|re| re.is_match(phone))
}

/// Returns `true` if any of the values is empty or whitespace only.
pub(crate) fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        for ok in ["a@b.co", "first.last@mail.example.org", "x@y.z", "a@b..c", "üser@dömain.de"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "plain", "@b.co", "a@", "a@.co", "a@b.", "a@bco", "a b@c.de", "a@b@c.de", "a@b .de"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
        assert!(!is_valid_email("a@b.co\n"));
    }

    #[test]
    fn phones() {
        for ok in ["1", "+1", "8801704439665", "+8801704439665", "1234567890123456"] {
            assert!(is_valid_phone(ok), "{ok}");
        }
        for bad in ["", "+", "0123", "+0123", "12345678901234567", "880 1704", "880-1704", "++880", "12a", "1\u{0663}\u{0664}"] {
            assert!(!is_valid_phone(bad), "{bad}");
        }
    }

    #[test]
    fn blank_detection() {
        assert!(any_blank(&["name", ""]));
        assert!(any_blank(&["  "]));
        assert!(!any_blank(&["name", "mail"]));
    }
}
