//! Path optimizer: pick the best bullet markers by dynamic programming.
//!
//! The grouped layers form a directed acyclic layered graph with virtual
//! START and END nodes. One node per (layer, slot) pair represents "this
//! candidate is chosen as a real bullet". A forward pass scores the best
//! path ending at every node, tracks the best terminal seen per layer, and
//! a trim-back rule drops a weakly-scored trailing bullet.

use crate::config::ScoreWeights;
use crate::types::{Marker, OptimalPath, PathNode};

/// Score a forward step between markers in adjacent layers.
///
/// Valid only when the target offset strictly exceeds the source offset:
/// base step score, plus the suffix bonus when both markers carry the same
/// punctuation. Anything else is forbidden.
fn step_score(prev: &Marker, cur: &Marker, weights: &ScoreWeights) -> i32 {
    if cur.offset > prev.offset {
        let mut score = weights.step;
        if prev.suffix == cur.suffix {
            score += weights.suffix_bonus;
        }
        score
    } else {
        weights.forbidden
    }
}

/// Find the highest-scoring ascending path through the marker layers.
///
/// Expects the grouper invariant: every layer passed in is non-empty.
/// Returns `None` when there are no layers; the caller then treats the
/// whole string as a single segment.
///
/// Tie handling is deliberate: equal-scoring predecessors resolve to the
/// first slot in layer order, and among equal-scoring stopping layers the
/// smallest layer wins.
#[must_use]
pub fn optimize(layers: &[Vec<Marker>], weights: &ScoreWeights) -> Option<OptimalPath> {
    if layers.is_empty() {
        return None;
    }
    debug_assert!(
        layers.iter().all(|layer| !layer.is_empty()),
        "every layer must be non-empty"
    );

    // best[layer][slot]: best path score ending at that node
    // parent[layer][slot]: slot of the maximizing predecessor in layer-1
    let mut best: Vec<Vec<i32>> = Vec::with_capacity(layers.len());
    let mut parent: Vec<Vec<Option<usize>>> = Vec::with_capacity(layers.len());

    // Per layer i: best terminal score and node over all nodes in layers
    // 0..=i, first-seen node kept on ties.
    let mut end_best: Vec<(i32, PathNode)> = Vec::with_capacity(layers.len());
    let mut running_score = i32::MIN;
    let mut running_node = PathNode { layer: 0, slot: 0 };

    for (layer_idx, layer) in layers.iter().enumerate() {
        let mut scores = Vec::with_capacity(layer.len());
        let mut parents = Vec::with_capacity(layer.len());

        for (slot, marker) in layer.iter().enumerate() {
            let (score, pred) = if layer_idx == 0 {
                (weights.virtual_edge, None)
            } else {
                let mut best_score = i32::MIN;
                let mut best_pred = 0;
                for (prev_slot, prev) in layers[layer_idx - 1].iter().enumerate() {
                    let candidate = best[layer_idx - 1][prev_slot] + step_score(prev, marker, weights);
                    if candidate > best_score {
                        best_score = candidate;
                        best_pred = prev_slot;
                    }
                }
                (best_score, Some(best_pred))
            };

            let end_score = score + weights.virtual_edge;
            if end_score > running_score {
                running_score = end_score;
                running_node = PathNode {
                    layer: layer_idx,
                    slot,
                };
            }

            scores.push(score);
            parents.push(pred);
        }

        best.push(scores);
        parent.push(parents);
        end_best.push((running_score, running_node));
    }

    // Smallest layer with the maximum terminal score wins
    let mut stop_layer = 0;
    let mut stop_score = i32::MIN;
    for (i, &(score, _)) in end_best.iter().enumerate() {
        if score > stop_score {
            stop_score = score;
            stop_layer = i;
        }
    }

    // Trim-back: a final bullet whose step was worth less than a full
    // consistent step (index increased but suffix did not match) is judged
    // spurious, so fall back to the terminal recorded one layer earlier.
    let mut terminal = end_best[stop_layer].1;
    if stop_layer > 0 && stop_score - end_best[stop_layer - 1].0 < weights.virtual_edge {
        terminal = end_best[stop_layer - 1].1;
        tracing::debug!(
            dropped_layer = stop_layer + 1,
            "trimmed weakly-scored trailing bullet"
        );
    }

    // Walk the recorded predecessors back to the first layer
    let mut nodes = vec![terminal];
    let mut cur = terminal;
    while let Some(pred_slot) = parent[cur.layer][cur.slot] {
        cur = PathNode {
            layer: cur.layer - 1,
            slot: pred_slot,
        };
        nodes.push(cur);
    }
    nodes.reverse();

    let split_points = nodes
        .iter()
        .map(|n| layers[n.layer][n.slot].offset)
        .collect();

    Some(OptimalPath {
        nodes,
        split_points,
    })
}
