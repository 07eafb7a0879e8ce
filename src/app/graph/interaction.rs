use eframe::egui::{Pos2, Vec2};

use crate::notes::NoteId;

use super::LayoutEngine;

/// Releases with less cumulative pointer travel than this count as clicks
/// and open the note instead of just repositioning it.
const CLICK_DRAG_THRESHOLD: f32 = 4.0;

pub(in crate::app) enum DragState {
    Idle,
    Dragging { index: usize, travelled: f32 },
}

impl DragState {
    pub(in crate::app) fn dragged_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { index, .. } => Some(*index),
        }
    }
}

impl LayoutEngine {
    pub(in crate::app) fn is_dragging(&self) -> bool {
        self.drag.dragged_index().is_some()
    }

    /// Pointer pressed over the surface. A miss keeps the state `Idle`.
    pub(in crate::app) fn pointer_down(&mut self, pointer: Pos2) {
        if let DragState::Idle = self.drag
            && let Some(index) = self.hit_node(pointer)
        {
            self.drag = DragState::Dragging {
                index,
                travelled: 0.0,
            };
        }
    }

    /// The dragged node follows the pointer directly; the simulation never
    /// overwrites this position while the drag lasts.
    pub(in crate::app) fn pointer_move(&mut self, pointer: Pos2, delta: Vec2) {
        if let DragState::Dragging { index, travelled } = &mut self.drag {
            *travelled += delta.length();
            if let Some(node) = self.nodes.get_mut(*index) {
                node.pos = pointer;
            }
        }
    }

    /// Ends the drag. Returns the note to open when the whole gesture stayed
    /// under the click threshold.
    pub(in crate::app) fn pointer_up(&mut self) -> Option<NoteId> {
        match std::mem::replace(&mut self.drag, DragState::Idle) {
            DragState::Dragging { index, travelled } if travelled < CLICK_DRAG_THRESHOLD => {
                self.nodes.get(index).map(|node| node.id)
            }
            _ => None,
        }
    }

    /// Nearest node whose hit circle contains the pointer; ties between
    /// overlapping circles go to the lower storage index.
    fn hit_node(&self, pointer: Pos2) -> Option<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let distance = node.pos.distance(pointer);
                (distance < node.radius).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use crate::notes::NoteStore;

    use super::super::LayoutEngine;
    use super::DragState;

    fn engine_with_two_notes() -> (LayoutEngine, NoteStore) {
        let mut store = NoteStore::new();
        let a = store.create();
        let b = store.create();
        store.get_mut(a).expect("note exists").title = "A".to_owned();
        store.get_mut(b).expect("note exists").title = "B".to_owned();

        let mut engine = LayoutEngine::new();
        engine.rebuild(store.notes(), pos2(0.0, 0.0));
        engine.nodes[0].pos = pos2(0.0, 0.0);
        engine.nodes[1].pos = pos2(200.0, 0.0);
        (engine, store)
    }

    #[test]
    fn press_on_empty_space_stays_idle() {
        let (mut engine, _store) = engine_with_two_notes();
        engine.pointer_down(pos2(100.0, 100.0));
        assert!(engine.drag.dragged_index().is_none());
        assert_eq!(engine.pointer_up(), None);
    }

    #[test]
    fn press_inside_a_node_starts_dragging_it() {
        let (mut engine, _store) = engine_with_two_notes();
        engine.pointer_down(pos2(10.0, 10.0));
        assert_eq!(engine.drag.dragged_index(), Some(0));
    }

    #[test]
    fn overlapping_nodes_resolve_to_the_nearest() {
        let (mut engine, _store) = engine_with_two_notes();
        engine.nodes[1].pos = pos2(20.0, 0.0);
        // Pointer is inside both circles but closer to node 1.
        engine.pointer_down(pos2(14.0, 0.0));
        assert_eq!(engine.drag.dragged_index(), Some(1));
    }

    #[test]
    fn dragged_node_follows_the_pointer() {
        let (mut engine, _store) = engine_with_two_notes();
        engine.pointer_down(pos2(5.0, 0.0));
        engine.pointer_move(pos2(150.0, 90.0), vec2(145.0, 90.0));
        assert_eq!(engine.nodes[0].pos, pos2(150.0, 90.0));
        assert!(matches!(engine.drag, DragState::Dragging { .. }));
    }

    #[test]
    fn short_release_opens_the_note() {
        let (mut engine, store) = engine_with_two_notes();
        engine.pointer_down(pos2(5.0, 0.0));
        engine.pointer_move(pos2(6.0, 0.0), vec2(1.0, 0.0));
        assert_eq!(engine.pointer_up(), Some(store.notes()[0].id));
        assert!(engine.drag.dragged_index().is_none());
    }

    #[test]
    fn long_drag_repositions_without_opening() {
        let (mut engine, _store) = engine_with_two_notes();
        engine.pointer_down(pos2(5.0, 0.0));
        engine.pointer_move(pos2(80.0, 0.0), vec2(75.0, 0.0));
        assert_eq!(engine.pointer_up(), None);
        assert_eq!(engine.nodes[0].pos, pos2(80.0, 0.0));
    }
}
