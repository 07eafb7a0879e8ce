mod build;
mod interaction;
mod view;

use eframe::egui::{Pos2, Vec2};

use crate::notes::NoteId;

use super::physics::{PairwiseRepulsion, PhysicsConfig, PhysicsScratch, step_layout};
pub(in crate::app) use interaction::DragState;

/// Rendering and hit-test radius of every node.
pub(in crate::app) const NODE_RADIUS: f32 = 25.0;
/// Radius of the circle fresh node sets are placed on.
pub(in crate::app) const SPAWN_RING_RADIUS: f32 = 100.0;

pub(in crate::app) struct GraphNode {
    pub id: NoteId,
    pub label: String,
    pub pos: Pos2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A resolved bracket link. Both endpoints existed in the node set when the
/// edge was built; render still skips unresolved endpoints defensively.
pub(in crate::app) struct GraphEdge {
    pub source: NoteId,
    pub target: NoteId,
}

/// Owns the ephemeral layout state: the node set (rebuilt on note-count
/// change), the edge set (rebuilt every tick), and the drag state machine.
pub(in crate::app) struct LayoutEngine {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    drag: DragState,
    repulsion: PairwiseRepulsion,
    scratch: PhysicsScratch,
    spring_scratch: Vec<(usize, usize)>,
}

impl LayoutEngine {
    pub(in crate::app) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            drag: DragState::Idle,
            repulsion: PairwiseRepulsion,
            scratch: PhysicsScratch::default(),
            spring_scratch: Vec::new(),
        }
    }

    pub(in crate::app) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(in crate::app) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn node_index(&self, id: NoteId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// One simulation step. Returns whether any node is still moving.
    pub(in crate::app) fn step(&mut self, center: Pos2, config: PhysicsConfig) -> bool {
        self.spring_scratch.clear();
        for edge in &self.edges {
            if let (Some(source), Some(target)) =
                (self.node_index(edge.source), self.node_index(edge.target))
            {
                self.spring_scratch.push((source, target));
            }
        }

        step_layout(
            &mut self.nodes,
            &self.spring_scratch,
            center,
            self.drag.dragged_index(),
            config,
            &self.repulsion,
            &mut self.scratch,
        )
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use crate::notes::NoteStore;

    use super::super::physics::PhysicsConfig;
    use super::LayoutEngine;

    #[test]
    fn step_on_empty_engine_is_a_no_op() {
        let mut engine = LayoutEngine::new();
        assert!(!engine.step(pos2(400.0, 300.0), PhysicsConfig::default()));
        assert_eq!(engine.node_count(), 0);
        assert_eq!(engine.edge_count(), 0);
    }

    #[test]
    fn linked_nodes_settle_closer_than_unlinked_ones() {
        let mut store = NoteStore::new();
        let a = store.create();
        let b = store.create();
        let c = store.create();
        for (id, title) in [(a, "A"), (b, "B"), (c, "C")] {
            store.get_mut(id).expect("note exists").title = title.to_owned();
        }
        let note_a = store.get_mut(a).expect("note exists");
        note_a.content = "[[B]]".to_owned();
        note_a.links = vec!["B".to_owned()];

        let center = pos2(400.0, 300.0);
        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), center);

        for _ in 0..300 {
            engine.step(center, PhysicsConfig::default());
        }

        let pos_of = |index: usize| engine.nodes[index].pos;
        let linked = pos_of(0).distance(pos_of(1));
        let unlinked = pos_of(0).distance(pos_of(2)).min(pos_of(1).distance(pos_of(2)));
        assert!(linked < unlinked);
    }
}
