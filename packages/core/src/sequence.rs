//! Sequence grouper: organize marker candidates into contiguous value layers.

use crate::types::Marker;

/// Group candidates into layers for values 1, 2, 3, ... in turn.
///
/// Layer construction probes values in `1..max_bullets` (exclusive upper
/// bound) and stops at the first value with no candidate, so every returned
/// layer is non-empty and the layers form the longest contiguous run
/// starting at 1. Within a layer, candidates keep the scanner's
/// left-to-right match order.
///
/// Returns an empty vector when no candidate has value 1.
#[must_use]
pub fn group_layers(markers: &[Marker], max_bullets: usize) -> Vec<Vec<Marker>> {
    let mut layers = Vec::new();

    for value in 1..max_bullets {
        let layer: Vec<Marker> = markers
            .iter()
            .filter(|m| m.value as usize == value)
            .copied()
            .collect();
        if layer.is_empty() {
            break;
        }
        layers.push(layer);
    }

    layers
}
