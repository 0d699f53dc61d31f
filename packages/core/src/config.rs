//! Configuration constants and scoring weights.

use serde::{Deserialize, Serialize};

/// Default maximum bullet count to consider.
///
/// Layer construction probes values `1..DEFAULT_MAX_BULLETS` (exclusive),
/// so the default admits numbered lists of up to 14 items. Raising it
/// allows longer lists at increased search cost.
pub const DEFAULT_MAX_BULLETS: usize = 15;

/// Edge scores for the path search over marker layers.
///
/// The defaults are tuned values; their relative ordering is load-bearing:
/// `virtual_edge` must equal `step + suffix_bonus` (a fully consistent step
/// is worth exactly as much as starting or stopping), and `forbidden` must
/// dominate any achievable path total so an invalid edge can never win.
/// The trim-back rule in the optimizer reuses `virtual_edge` as its
/// threshold: a final step worth less than a full consistent step is
/// judged a spurious trailing bullet and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Score for START -> first-layer node and node -> END edges.
    pub virtual_edge: i32,

    /// Base score for a valid forward step to the next layer.
    pub step: i32,

    /// Bonus when source and target markers share the same suffix
    /// character ("1." followed by "2." rather than a stray "1)").
    pub suffix_bonus: i32,

    /// Penalty for an impossible edge (offset not increasing).
    pub forbidden: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            virtual_edge: 10,
            step: 1,
            suffix_bonus: 9,
            forbidden: -999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.virtual_edge, 10);
        assert_eq!(weights.step, 1);
        assert_eq!(weights.suffix_bonus, 9);
        assert_eq!(weights.forbidden, -999);
    }

    #[test]
    fn test_weight_ordering_invariants() {
        let weights = ScoreWeights::default();
        // A fully consistent step is worth exactly one virtual edge
        assert_eq!(weights.virtual_edge, weights.step + weights.suffix_bonus);
        // The penalty dominates the best achievable path through all layers
        let best_possible =
            weights.virtual_edge * 2 + (weights.step + weights.suffix_bonus) * DEFAULT_MAX_BULLETS as i32;
        assert!(weights.forbidden + best_possible < 0);
    }
}
