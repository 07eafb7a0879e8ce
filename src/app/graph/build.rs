use std::f32::consts::TAU;

use eframe::egui::{Pos2, Vec2, vec2};
use log::debug;

use crate::notes::Note;

use super::{GraphEdge, GraphNode, LayoutEngine, NODE_RADIUS, SPAWN_RING_RADIUS, DragState};

impl LayoutEngine {
    /// Brings the layout model in line with the note collection. Nodes are
    /// only rebuilt when the note count changed; edges are recomputed every
    /// call.
    pub(in crate::app) fn rebuild(&mut self, notes: &[Note], center: Pos2) {
        self.rebuild_nodes(notes, center);
        self.rebuild_edges(notes);
    }

    /// Count-gated: a mid-session content or title edit keeps the node set
    /// (and with it all in-progress positions and velocities) untouched. Any
    /// count change discards the whole layout and starts every node on a
    /// circle around `center`.
    fn rebuild_nodes(&mut self, notes: &[Note], center: Pos2) {
        if self.nodes.len() == notes.len() {
            return;
        }

        debug!(
            "event=graph_nodes_rebuilt previous={} next={}",
            self.nodes.len(),
            notes.len()
        );

        let count = notes.len();
        self.nodes = notes
            .iter()
            .enumerate()
            .map(|(index, note)| {
                let angle = (index as f32 / count as f32) * TAU;
                GraphNode {
                    id: note.id,
                    label: note.title.clone(),
                    pos: center + vec2(angle.cos(), angle.sin()) * SPAWN_RING_RADIUS,
                    vel: Vec2::ZERO,
                    radius: NODE_RADIUS,
                }
            })
            .collect();

        // Node indices changed; any in-flight drag points at stale state.
        self.drag = DragState::Idle;
    }

    /// Full recomputation: for each note, each extracted link title resolves
    /// against the first note whose title matches exactly (case-sensitive).
    /// Unresolved titles are dropped silently; duplicates are preserved.
    /// Labels are refreshed here too, so a title edit shows up without a
    /// count-triggered rebuild.
    fn rebuild_edges(&mut self, notes: &[Note]) {
        self.edges.clear();
        for note in notes {
            for link_title in &note.links {
                if let Some(target) = notes.iter().find(|candidate| &candidate.title == link_title)
                {
                    self.edges.push(GraphEdge {
                        source: note.id,
                        target: target.id,
                    });
                }
            }
        }

        for node in &mut self.nodes {
            if let Some(note) = notes.iter().find(|note| note.id == node.id)
                && node.label != note.title
            {
                node.label.clone_from(&note.title);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use eframe::egui::pos2;

    use crate::notes::{NoteId, NoteStore};

    use super::super::{LayoutEngine, SPAWN_RING_RADIUS};

    fn store_with(entries: &[(&str, &[&str])]) -> NoteStore {
        let mut store = NoteStore::new();
        for (title, links) in entries {
            let id = store.create();
            let note = store.get_mut(id).expect("note exists");
            note.title = (*title).to_owned();
            note.links = links.iter().map(|link| (*link).to_owned()).collect();
        }
        store
    }

    #[test]
    fn fresh_build_places_every_note_on_the_spawn_circle() {
        let store = store_with(&[("A", &[]), ("B", &[]), ("C", &[]), ("D", &[])]);
        let center = pos2(400.0, 300.0);

        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), center);

        assert_eq!(engine.node_count(), 4);
        let ids: HashSet<NoteId> = engine.nodes.iter().map(|node| node.id).collect();
        assert_eq!(ids.len(), 4);
        for (node, note) in engine.nodes.iter().zip(store.notes()) {
            assert_eq!(node.id, note.id);
            assert!((node.pos.distance(center) - SPAWN_RING_RADIUS).abs() < 1e-3);
            assert_eq!(node.vel.length(), 0.0);
        }
    }

    #[test]
    fn zero_notes_build_empty_sets() {
        let store = NoteStore::new();
        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), pos2(0.0, 0.0));
        assert_eq!(engine.node_count(), 0);
        assert_eq!(engine.edge_count(), 0);
    }

    #[test]
    fn resolved_links_become_edges_and_unresolved_ones_vanish() {
        let store = store_with(&[("A", &["B", "Missing"]), ("B", &[])]);
        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), pos2(0.0, 0.0));

        assert_eq!(engine.edge_count(), 1);
        let edge = &engine.edges[0];
        assert_eq!(edge.source, store.notes()[0].id);
        assert_eq!(edge.target, store.notes()[1].id);
    }

    #[test]
    fn title_matching_is_case_sensitive_and_first_wins() {
        let store = store_with(&[("A", &["b", "B"]), ("B", &[]), ("B", &[])]);
        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), pos2(0.0, 0.0));

        // "b" resolves nowhere; "B" resolves to the first note titled B.
        assert_eq!(engine.edge_count(), 1);
        assert_eq!(engine.edges[0].target, store.notes()[1].id);
    }

    #[test]
    fn duplicate_links_keep_duplicate_edges() {
        let store = store_with(&[("A", &["B", "B"]), ("B", &[])]);
        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), pos2(0.0, 0.0));
        assert_eq!(engine.edge_count(), 2);
    }

    #[test]
    fn same_count_rebuild_keeps_layout_state() {
        let mut store = store_with(&[("A", &[]), ("B", &[])]);
        let center = pos2(400.0, 300.0);

        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), center);
        engine.nodes[0].pos = pos2(12.0, 34.0);
        engine.nodes[0].vel = eframe::egui::vec2(1.0, -1.0);

        // Content-only edit: same count, state survives.
        let id = store.notes()[0].id;
        store.get_mut(id).expect("note exists").content = "edited".to_owned();
        engine.rebuild(store.notes(), center);
        assert_eq!(engine.nodes[0].pos, pos2(12.0, 34.0));
        assert_eq!(engine.nodes[0].vel, eframe::egui::vec2(1.0, -1.0));

        // Count change: everything resets to the circle.
        store.create();
        engine.rebuild(store.notes(), center);
        assert_eq!(engine.node_count(), 3);
        for node in &engine.nodes {
            assert!((node.pos.distance(center) - SPAWN_RING_RADIUS).abs() < 1e-3);
            assert_eq!(node.vel.length(), 0.0);
        }
    }

    #[test]
    fn title_edit_refreshes_labels_without_node_rebuild() {
        let mut store = store_with(&[("A", &[]), ("B", &[])]);
        let center = pos2(0.0, 0.0);

        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), center);
        engine.nodes[0].pos = pos2(77.0, 0.0);

        let id = store.notes()[0].id;
        store.get_mut(id).expect("note exists").title = "Renamed".to_owned();
        engine.rebuild(store.notes(), center);

        assert_eq!(engine.nodes[0].label, "Renamed");
        assert_eq!(engine.nodes[0].pos, pos2(77.0, 0.0));
    }
}
