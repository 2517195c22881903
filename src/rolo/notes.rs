//! Free-text notes with tag and keyword search, independent of contacts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A note. The title is the match key for edit/remove but is not enforced
/// unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Note {
            title: title.into(),
            content: content.into(),
            tags,
        }
    }

    /// Case-insensitive substring match against title or content.
    fn matches_keyword(&self, keyword_lower: &str) -> bool {
        self.title.to_lowercase().contains(keyword_lower)
            || self.content.to_lowercase().contains(keyword_lower)
    }

    /// Case-insensitive exact match against any tag.
    fn has_tag(&self, tag_lower: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag_lower)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Content: {}, Tags: {}",
            self.title,
            self.content,
            self.tags.join(", ")
        )
    }
}

/// Notes in insertion order. Pure collection; persistence is the caller's
/// concern.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) {
        self.notes.push(Note::new(title, content, tags));
    }

    /// Drop every note with this exact title; returns how many were
    /// removed.
    pub fn remove_note(&mut self, title: &str) -> usize {
        let before = self.notes.len();
        self.notes.retain(|n| n.title != title);
        before - self.notes.len()
    }

    /// Mutate the first note with this title. `None` leaves the
    /// corresponding part unchanged; an explicit empty value clears it.
    /// Returns whether a note matched.
    pub fn edit_note(
        &mut self,
        title: &str,
        new_content: Option<&str>,
        new_tags: Option<Vec<String>>,
    ) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.title == title) else {
            return false;
        };
        if let Some(content) = new_content {
            note.content = content.to_string();
        }
        if let Some(tags) = new_tags {
            note.tags = tags;
        }
        true
    }

    pub fn find_notes(&self, keyword: &str) -> Vec<&Note> {
        let keyword = keyword.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.matches_keyword(&keyword))
            .collect()
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Vec<&Note> {
        let tag = tag.to_lowercase();
        self.notes.iter().filter(|n| n.has_tag(&tag)).collect()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
