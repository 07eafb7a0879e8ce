use eframe::egui::{Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use crate::notes::NoteId;
use crate::util::truncate_label;

use super::super::NoteMapApp;
use super::LayoutEngine;

const BACKGROUND: Color32 = Color32::from_rgb(19, 23, 29);
const EDGE_STROKE: Color32 = Color32::from_rgb(74, 74, 74);
const NODE_FILL: Color32 = Color32::from_rgb(124, 58, 237);
const LABEL_MAX_CHARS: usize = 10;

impl NoteMapApp {
    /// Runs one frame of the graph view: model rebuild, pointer handling,
    /// simulation step, render. Returns a note to open when a click resolved
    /// on a node. The step only ever runs from here, so switching away from
    /// the graph view stops the simulation outright.
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) -> Option<NoteId> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let center = rect.center();

        self.engine.rebuild(self.store.notes(), center);

        // Raw pointer events drive the drag state machine; egui's own
        // click-vs-drag heuristics would swallow short presses. Pointer
        // handling runs before the step so a frame never simulates against a
        // half-applied drag.
        let pointer = response.interact_pointer_pos();
        let (pressed, released, pointer_delta) = ui.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.delta(),
            )
        });

        let mut clicked_node = None;
        if pressed
            && response.hovered()
            && let Some(pointer) = pointer
        {
            self.engine.pointer_down(pointer);
        }
        if self.engine.is_dragging()
            && let Some(pointer) = pointer
        {
            self.engine.pointer_move(pointer, pointer_delta);
        }
        if released {
            clicked_node = self.engine.pointer_up();
        }

        let moving = self.engine.step(center, self.physics);
        self.engine.render(&painter, rect);

        painter.text(
            rect.left_top() + vec2(10.0, 10.0),
            Align2::LEFT_TOP,
            format!(
                "nodes: {}  links: {}",
                self.engine.node_count(),
                self.engine.edge_count()
            ),
            FontId::proportional(13.0),
            Color32::from_gray(240),
        );

        if moving || self.engine.is_dragging() {
            ui.ctx().request_repaint();
        }

        clicked_node
    }
}

impl LayoutEngine {
    /// Pure draw of the current snapshot: background, edges as segments,
    /// nodes as filled circles with centered truncated labels.
    fn render(&self, painter: &eframe::egui::Painter, rect: eframe::egui::Rect) {
        painter.rect_filled(rect, 0.0, BACKGROUND);

        for edge in &self.edges {
            let (Some(source), Some(target)) =
                (self.node_index(edge.source), self.node_index(edge.target))
            else {
                continue;
            };
            painter.line_segment(
                [self.nodes[source].pos, self.nodes[target].pos],
                Stroke::new(2.0, EDGE_STROKE),
            );
        }

        for node in &self.nodes {
            painter.circle_filled(node.pos, node.radius, NODE_FILL);
            painter.text(
                node.pos,
                Align2::CENTER_CENTER,
                truncate_label(&node.label, LABEL_MAX_CHARS),
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }
    }
}
