//! Small text helpers shared by the view models and renderer.

/// Uppercases the first character.
///
/// ```rust
/// use tourfinder::ui::helpers::capitalize;
///
/// assert_eq!(capitalize("moderate"), "Moderate");
/// ```
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Shortens `text` to at most `max_chars` characters, ending in `…` when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let kept: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", kept.trim_end())
}

/// `"1 review"`, `"124 reviews"`.
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes() {
        assert_eq!(capitalize("easy"), "Easy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Cox's Bazar Beach", 8), "Cox's B…");
        assert_eq!(truncate("ঢাকা শহর", 3), "ঢা…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn pluralizes() {
        assert_eq!(plural(1, "tour"), "1 tour");
        assert_eq!(plural(0, "tour"), "0 tours");
    }
}
