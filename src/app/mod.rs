use eframe::egui::{self, Context};
use log::info;

use crate::notes::spelling::WordList;
use crate::notes::{NoteId, NoteStore};

mod editor;
mod graph;
mod physics;

use graph::LayoutEngine;
use physics::PhysicsConfig;

pub struct NoteMapApp {
    store: NoteStore,
    word_list: WordList,
    view: ActiveView,
    current: Option<NoteId>,
    engine: LayoutEngine,
    physics: PhysicsConfig,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActiveView {
    Editor,
    Graph,
}

impl NoteMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, word_list: WordList) -> Self {
        Self {
            store: NoteStore::new(),
            word_list,
            view: ActiveView::Editor,
            current: None,
            engine: LayoutEngine::new(),
            physics: PhysicsConfig::default(),
        }
    }

    fn open_note(&mut self, id: NoteId) {
        if self.store.get(id).is_none() {
            return;
        }
        self.current = Some(id);
        self.view = ActiveView::Editor;
        info!("event=note_opened id={id}");
    }
}

impl eframe::App for NoteMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("notemap");
                    ui.separator();
                    ui.selectable_value(&mut self.view, ActiveView::Editor, "Editor");
                    ui.selectable_value(&mut self.view, ActiveView::Graph, "Graph");
                    ui.separator();
                    ui.label(format!("notes: {}", self.store.len()));
                });
            });

        egui::SidePanel::left("notes_list")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                if ui.button("New note").clicked() {
                    let id = self.store.create();
                    self.open_note(id);
                }
                ui.separator();

                if self.store.is_empty() {
                    ui.weak("No notes yet.");
                }

                let mut open_request = None;
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for note in self.store.notes() {
                        let title = if note.title.is_empty() {
                            "Untitled"
                        } else {
                            note.title.as_str()
                        };
                        let selected = self.current == Some(note.id);
                        if ui.selectable_label(selected, title).clicked() {
                            open_request = Some(note.id);
                        }
                    }
                });
                if let Some(id) = open_request {
                    self.open_note(id);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            ActiveView::Editor => self.draw_editor(ui),
            ActiveView::Graph => {
                if let Some(id) = self.draw_graph(ui) {
                    self.open_note(id);
                }
            }
        });
    }
}
