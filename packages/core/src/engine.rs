//! Split engine that runs the full detection-and-split pipeline.

use crate::config::{ScoreWeights, DEFAULT_MAX_BULLETS};
use crate::optimizer;
use crate::scanner;
use crate::segmenter;
use crate::sequence;

/// Engine for splitting free text at numeric bullet markers.
///
/// Holds the configuration and runs scanner, grouper, optimizer and
/// segmenter in order. Stateless across calls: every input string is
/// processed independently, so one engine may be shared freely.
#[derive(Debug, Clone)]
pub struct SplitEngine {
    max_bullets: usize,
    weights: ScoreWeights,
}

impl SplitEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_bullets: DEFAULT_MAX_BULLETS,
            weights: ScoreWeights::default(),
        }
    }

    /// Set the maximum bullet count to consider.
    #[must_use]
    pub fn with_max_bullets(mut self, max_bullets: usize) -> Self {
        self.max_bullets = max_bullets;
        self
    }

    /// Set the edge scoring weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Split `text` into ordered bullet segments.
    ///
    /// Concatenating the returned segments reproduces `text` exactly.
    /// Text without a detectable bullet sequence comes back as a single
    /// segment; this is a valid outcome, not an error.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        segmenter::segment(text, &self.split_points(text))
    }

    /// Byte offsets of the chosen bullet markers, in segment order.
    ///
    /// Empty when no valid bullet sequence survives scoring.
    #[must_use]
    pub fn split_points(&self, text: &str) -> Vec<usize> {
        let markers = scanner::scan(text);
        let layers = sequence::group_layers(&markers, self.max_bullets);
        tracing::debug!(
            candidates = markers.len(),
            layers = layers.len(),
            "scanned marker candidates"
        );

        match optimizer::optimize(&layers, &self.weights) {
            Some(path) => {
                tracing::debug!(bullets = path.nodes.len(), "chose bullet markers");
                path.split_points
            }
            None => Vec::new(),
        }
    }
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new()
    }
}
