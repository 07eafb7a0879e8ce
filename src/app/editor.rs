use std::sync::Arc;

use eframe::egui::text::{CCursor, CCursorRange, LayoutJob, TextFormat};
use eframe::egui::{Color32, FontId, Galley, Stroke, TextBuffer, TextEdit, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::notes::spelling::{self, WordList};
use crate::notes::links;

use super::NoteMapApp;

const MISSPELLED_UNDERLINE: Color32 = Color32::from_rgb(235, 87, 87);
const MAX_SUGGESTIONS: usize = 8;

impl NoteMapApp {
    pub(in crate::app) fn draw_editor(&mut self, ui: &mut Ui) {
        let Some(current) = self.current else {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("No note open");
                ui.add_space(6.0);
                ui.label("Create a note on the left, or click one in the graph view.");
            });
            return;
        };

        let lowered_titles: Vec<String> = self
            .store
            .notes()
            .iter()
            .map(|note| note.title.to_lowercase())
            .collect();
        let other_titles: Vec<String> = self
            .store
            .notes()
            .iter()
            .filter(|note| note.id != current)
            .map(|note| note.title.clone())
            .collect();

        let word_list = &self.word_list;
        let Some(note) = self.store.get_mut(current) else {
            return;
        };

        ui.horizontal(|ui| {
            ui.label("Title:");
            ui.add(TextEdit::singleline(&mut note.title).desired_width(f32::INFINITY));
        });
        ui.add_space(4.0);

        let mut layouter = |ui: &Ui, buffer: &dyn TextBuffer, wrap_width: f32| -> Arc<Galley> {
            let mut job = spellcheck_layout_job(ui, buffer.as_str(), word_list, &lowered_titles);
            job.wrap.max_width = wrap_width;
            ui.fonts_mut(|fonts| fonts.layout_job(job))
        };

        let output = TextEdit::multiline(&mut note.content)
            .desired_width(f32::INFINITY)
            .desired_rows(20)
            .layouter(&mut layouter)
            .show(ui);

        if output.response.changed() {
            note.links = links::extract_link_titles(&note.content);
        }

        // Suggestion strip: active while the cursor sits inside an unclosed
        // "[[", fuzzy-filtered by whatever is already typed.
        let cursor_chars = output
            .state
            .cursor
            .char_range()
            .map(|range| range.primary.index);
        if let Some(cursor) = cursor_chars
            && let Some(open) = links::open_bracket_at(&note.content, cursor)
        {
            let matcher = SkimMatcherV2::default();
            let mut ranked: Vec<(i64, &String)> = other_titles
                .iter()
                .filter_map(|title| {
                    if open.query.is_empty() {
                        Some((0, title))
                    } else {
                        matcher.fuzzy_match(title, &open.query).map(|score| (score, title))
                    }
                })
                .collect();
            ranked.sort_by(|a, b| b.0.cmp(&a.0));

            if !ranked.is_empty() {
                let mut chosen = None;
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label("Link to:");
                    for (_score, title) in ranked.iter().take(MAX_SUGGESTIONS) {
                        if ui.small_button(title.as_str()).clicked() {
                            chosen = Some((*title).clone());
                        }
                    }
                });

                if let Some(title) = chosen {
                    let (content, new_cursor) =
                        links::insert_link(&note.content, open.start, cursor, &title);
                    note.content = content;
                    note.links = links::extract_link_titles(&note.content);

                    let mut state = output.state;
                    state
                        .cursor
                        .set_char_range(Some(CCursorRange::one(CCursor::new(new_cursor))));
                    state.store(ui.ctx(), output.response.id);
                    output.response.request_focus();
                }
            }
        }
    }
}

/// Lays the content out in one job, with unknown words underlined in red.
fn spellcheck_layout_job(
    ui: &Ui,
    text: &str,
    words: &WordList,
    lowered_titles: &[String],
) -> LayoutJob {
    let normal = TextFormat {
        font_id: FontId::monospace(14.0),
        color: ui.visuals().text_color(),
        ..Default::default()
    };
    let flagged = TextFormat {
        underline: Stroke::new(1.5, MISSPELLED_UNDERLINE),
        ..normal.clone()
    };

    let mut job = LayoutJob::default();
    let mut consumed = 0;
    for range in spelling::misspelled_ranges(text, words, lowered_titles) {
        if range.start > consumed {
            job.append(&text[consumed..range.start], 0.0, normal.clone());
        }
        job.append(&text[range.clone()], 0.0, flagged.clone());
        consumed = range.end;
    }
    if consumed < text.len() {
        job.append(&text[consumed..], 0.0, normal);
    }
    job
}
