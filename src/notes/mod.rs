//! In-memory note collection. Notes live only for the session; there is no
//! persistence layer.

pub mod links;
pub mod spelling;

use std::fmt;

use log::info;

/// Unique, stable for the lifetime of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Note {
    pub id: NoteId,
    /// Display string and the cross-reference key for bracket links.
    pub title: String,
    pub content: String,
    /// Outbound link titles extracted from `content`, recomputed on every edit.
    pub links: Vec<String>,
}

pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        self.notes.push(Note {
            id,
            title: "Untitled".to_owned(),
            content: String::new(),
            links: Vec::new(),
        });
        info!("event=note_created id={id} total={}", self.notes.len());
        id
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Callers editing `content` are responsible for refreshing `links` via
    /// [`links::extract_link_titles`] afterwards.
    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
