use eframe::egui::{Pos2, Vec2};

/// Pairwise repulsion seam. The layout step only depends on the accumulated
/// impulses, so an approximating implementation (grid, Barnes-Hut) can be
/// swapped in for larger graphs without touching the rest of the step.
pub(in crate::app) trait RepulsionModel {
    /// Adds each node's repulsive velocity impulse into `impulses`.
    /// `impulses` has the same length as `positions`.
    fn accumulate(&self, positions: &[Pos2], strength: f32, impulses: &mut [Vec2]);
}

/// Exact O(n²) inverse-square repulsion over all unordered pairs. Node counts
/// stay interactive-small here, so no spatial partitioning is needed.
pub(in crate::app) struct PairwiseRepulsion;

impl RepulsionModel for PairwiseRepulsion {
    fn accumulate(&self, positions: &[Pos2], strength: f32, impulses: &mut [Vec2]) {
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let delta = positions[j] - positions[i];
                // Distance floor keeps coincident nodes from dividing by zero.
                let distance = delta.length().max(1.0);
                let magnitude = strength / (distance * distance);
                let impulse = (delta / distance) * magnitude;

                impulses[i] -= impulse;
                impulses[j] += impulse;
            }
        }
    }
}
