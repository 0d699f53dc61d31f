//! Markup preprocessing for raw input text.

use regex::Regex;
use std::sync::LazyLock;

/// The fixed set of markup tokens that may survive upstream export.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br>|</br>|<span>|</span>").expect("valid regex"));

/// Replace line-break and span markers with a single space.
///
/// This runs before the split pipeline, never inside it: the engine's
/// round-trip guarantee holds for the string it actually receives.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    MARKUP_PATTERN.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_markup_replaces_tokens() {
        assert_eq!(
            strip_markup("stable<br>1. rest</br>2. fluids"),
            "stable 1. rest 2. fluids"
        );
        assert_eq!(strip_markup("<span>note</span>"), " note ");
    }

    #[test]
    fn test_strip_markup_leaves_plain_text() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
        assert_eq!(strip_markup(""), "");
    }

    #[test]
    fn test_strip_markup_ignores_other_tags() {
        assert_eq!(strip_markup("<b>bold</b>"), "<b>bold</b>");
    }
}
