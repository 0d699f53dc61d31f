//! Marker scanner: find numeric bullet candidates by regex matching.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Marker;

/// One or more digits, optionally followed by '.', ':' or ')', followed by
/// whitespace. Matches are non-overlapping, scanned left to right.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.:)]?\s").expect("valid regex"));

/// Scan `text` for numeric marker candidates, in match order.
///
/// Returns an empty vector when no candidate exists; downstream stages
/// degenerate to a no-split result in that case.
#[must_use]
pub fn scan(text: &str) -> Vec<Marker> {
    MARKER_PATTERN
        .find_iter(text)
        .map(|m| {
            let matched = m.as_str();
            let digit_len = matched
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(matched.len());
            // Digit runs longer than u32 can hold are noise by definition;
            // they only need to stay distinguishable from real layer values.
            let value = matched[..digit_len].parse::<u32>().unwrap_or(u32::MAX);
            let suffix = matched[digit_len..].chars().next().unwrap_or(' ');
            Marker::new(m.start(), value, suffix)
        })
        .collect()
}
