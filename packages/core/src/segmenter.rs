//! Segmenter: cut the input string at the chosen split points.

/// Build the full boundary list for a set of marker offsets.
///
/// Prepends 0 unless the first marker sits at the start of the string and
/// appends `len` unless already present, so the boundaries always cover
/// the whole input including the text before the first real marker.
#[must_use]
pub fn boundaries(len: usize, split_points: &[usize]) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(split_points.len() + 2);
    if split_points.first() != Some(&0) {
        bounds.push(0);
    }
    bounds.extend_from_slice(split_points);
    if bounds.last() != Some(&len) || bounds.len() == 1 {
        bounds.push(len);
    }
    bounds
}

/// Cut `text` into the substrings between consecutive boundaries.
///
/// Concatenating the returned segments reproduces `text` exactly. With no
/// split points the whole string comes back as a single segment.
#[must_use]
pub fn segment(text: &str, split_points: &[usize]) -> Vec<String> {
    boundaries(text.len(), split_points)
        .windows(2)
        .map(|pair| text[pair[0]..pair[1]].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segment_no_split_points() {
        assert_eq!(segment("hello world", &[]), vec!["hello world"]);
    }

    #[test]
    fn test_segment_empty_string() {
        assert_eq!(segment("", &[]), vec![""]);
    }

    #[test]
    fn test_segment_keeps_leading_text() {
        assert_eq!(
            segment("intro 1. one 2. two", &[6, 13]),
            vec!["intro ", "1. one ", "2. two"]
        );
    }

    #[test]
    fn test_segment_marker_at_start_has_no_empty_prefix() {
        assert_eq!(segment("1. one 2. two", &[0, 7]), vec!["1. one ", "2. two"]);
    }

    #[test]
    fn test_boundaries_monotonic_and_closed() {
        let bounds = boundaries(19, &[6, 13]);
        assert_eq!(bounds, vec![0, 6, 13, 19]);
        assert!(bounds.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_segment_round_trip() {
        let text = "prefix 1. a 2. b 3. c";
        let segments = segment(text, &[7, 12, 17]);
        assert_eq!(segments.concat(), text);
    }
}
