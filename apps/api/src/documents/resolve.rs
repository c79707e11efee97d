//! Field resolution — the single fallback routine shared by every template.
//! Templates never re-derive placeholder logic themselves; they call through
//! here so an empty field always resolves the same way regardless of variant.

use crate::locale::Locale;

/// Returns the field value, or the fallback when the value is empty or
/// whitespace-only. Rendering never fails on empty input.
pub fn resolve<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// True when the field carries displayable content. Optional sections whose
/// every field is empty are suppressed rather than placeholder-filled.
pub fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Joins a start/end date pair for display. An empty end date on a non-empty
/// start date reads as an ongoing position.
pub fn date_range(start: &str, end: &str, locale: Locale) -> String {
    match (present(start), present(end)) {
        (true, true) => format!("{} – {}", start.trim(), end.trim()),
        (true, false) => format!("{} – {}", start.trim(), locale.present()),
        (false, true) => end.trim().to_string(),
        (false, false) => String::new(),
    }
}

/// Minimal HTML escaping for user-supplied field text.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_value() {
        assert_eq!(resolve("Jane Doe", "Your Name"), "Jane Doe");
    }

    #[test]
    fn test_resolve_falls_back_on_empty_and_whitespace() {
        assert_eq!(resolve("", "Your Name"), "Your Name");
        assert_eq!(resolve("   ", "Your Name"), "Your Name");
    }

    #[test]
    fn test_date_range_ongoing() {
        assert_eq!(date_range("2021", "", Locale::En), "2021 – Present");
        assert_eq!(date_range("2021", "", Locale::Fr), "2021 – Aujourd'hui");
    }

    #[test]
    fn test_date_range_both_empty_is_empty() {
        assert_eq!(date_range("", "", Locale::En), "");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
