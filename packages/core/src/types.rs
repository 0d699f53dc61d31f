//! Core data types for bullet detection.

/// A numeric marker candidate found in the input string.
///
/// One candidate per regex match; immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Byte offset of the first digit in the input string.
    pub offset: usize,

    /// Numeric value of the digit run (leading zeros collapse, so "01."
    /// has value 1).
    pub value: u32,

    /// The character immediately following the digit run: '.', ':', ')'
    /// or the whitespace itself when no punctuation is present.
    pub suffix: char,
}

impl Marker {
    /// Create a new marker candidate.
    #[must_use]
    pub fn new(offset: usize, value: u32, suffix: char) -> Self {
        Self {
            offset,
            value,
            suffix,
        }
    }
}

/// A node in the layered search graph, identified by zero-based layer
/// and slot-within-layer indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    /// Zero-based layer index (layer 0 holds markers with value 1).
    pub layer: usize,

    /// Zero-based position within the layer, in scan order.
    pub slot: usize,
}

/// The winning path through the marker layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalPath {
    /// Chosen nodes, one per layer from the first layer up to the
    /// stopping layer, strictly increasing in string offset.
    pub nodes: Vec<PathNode>,

    /// Byte offsets of the chosen markers, in segment order.
    pub split_points: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_new() {
        let marker = Marker::new(13, 1, '.');
        assert_eq!(marker.offset, 13);
        assert_eq!(marker.value, 1);
        assert_eq!(marker.suffix, '.');
    }
}
