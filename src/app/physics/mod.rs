mod forces;

use eframe::egui::{Pos2, Vec2};

pub(in crate::app) use forces::{PairwiseRepulsion, RepulsionModel};

use super::graph::GraphNode;

/// Below this squared speed a node is considered at rest and its velocity is
/// zeroed, so a settled layout stops reporting motion.
const MIN_SLEEP_SPEED_SQ: f32 = 0.0001;

#[derive(Clone, Copy)]
pub(in crate::app) struct PhysicsConfig {
    pub repulsion_strength: f32,
    /// Ideal spring length; an edge at exactly this distance is force-free.
    pub spring_length: f32,
    pub spring_stiffness: f32,
    pub center_gravity: f32,
    pub velocity_damping: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            repulsion_strength: 5000.0,
            spring_length: 100.0,
            spring_stiffness: 0.05,
            center_gravity: 0.005,
            velocity_damping: 0.9,
        }
    }
}

#[derive(Default)]
pub(in crate::app) struct PhysicsScratch {
    positions: Vec<Pos2>,
    impulses: Vec<Vec2>,
}

/// Advances the layout by one simulated step: repulsion, spring attraction,
/// center gravity, damping, then integration. The dragged node still
/// accumulates velocity but its position stays wherever the pointer put it.
/// Returns whether any node is still moving.
pub(in crate::app) fn step_layout(
    nodes: &mut [GraphNode],
    springs: &[(usize, usize)],
    center: Pos2,
    dragged: Option<usize>,
    config: PhysicsConfig,
    repulsion: &dyn RepulsionModel,
    scratch: &mut PhysicsScratch,
) -> bool {
    if nodes.is_empty() {
        return false;
    }

    scratch.positions.clear();
    scratch.positions.extend(nodes.iter().map(|node| node.pos));
    scratch.impulses.clear();
    scratch.impulses.resize(nodes.len(), Vec2::ZERO);

    repulsion.accumulate(&scratch.positions, config.repulsion_strength, &mut scratch.impulses);
    accumulate_springs(
        &scratch.positions,
        springs,
        config.spring_length,
        config.spring_stiffness,
        &mut scratch.impulses,
    );

    let mut any_motion = false;
    for (index, node) in nodes.iter_mut().enumerate() {
        node.vel += scratch.impulses[index];
        node.vel += (center - node.pos) * config.center_gravity;
        node.vel *= config.velocity_damping;

        if dragged == Some(index) {
            continue;
        }

        if node.vel.length_sq() < MIN_SLEEP_SPEED_SQ {
            node.vel = Vec2::ZERO;
            continue;
        }

        node.pos += node.vel;
        any_motion = true;
    }

    any_motion
}

/// Hooke's-law pull toward the ideal length along every edge, equal and
/// opposite on the endpoints. Self-edges contribute nothing.
fn accumulate_springs(
    positions: &[Pos2],
    springs: &[(usize, usize)],
    length: f32,
    stiffness: f32,
    impulses: &mut [Vec2],
) {
    for &(source, target) in springs {
        if source == target {
            continue;
        }

        let delta = positions[target] - positions[source];
        let distance = delta.length().max(1.0);
        let magnitude = (distance - length) * stiffness;
        let impulse = (delta / distance) * magnitude;

        impulses[source] += impulse;
        impulses[target] -= impulse;
    }
}
