//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the address book, notebook, and
//! config live so the rest of the crate never touches paths directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. One data directory holding
//!   `addressbook.json`, `notes.json`, and `config.json`, each a whole
//!   pretty-printed JSON document rewritten on save.
//! - [`memory::InMemoryStore`]: in-memory mirror for tests and embedding;
//!   reproduces the missing-file semantics without a filesystem.
//!
//! ## Missing-file semantics
//!
//! A missing address book reads as an empty book and no file is created
//! until the first save. A missing notes file reads as an empty notebook
//! and the empty file is written immediately, so "never existed" and
//! "empty" become indistinguishable after first load. Missing config reads
//! as defaults.

use crate::book::AddressBook;
use crate::config::RoloConfig;
use crate::error::Result;
use crate::notes::Notebook;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted collections.
pub trait DataStore {
    /// Load the address book; missing backing data yields an empty book.
    fn load_book(&self) -> Result<AddressBook>;

    /// Persist the whole address book.
    fn save_book(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the notebook; missing backing data yields an empty notebook
    /// and creates the backing file.
    fn load_notes(&mut self) -> Result<Notebook>;

    /// Persist the whole notebook.
    fn save_notes(&mut self, notes: &Notebook) -> Result<()>;

    /// Load configuration; missing backing data yields defaults.
    fn load_config(&self) -> Result<RoloConfig>;

    /// Persist configuration.
    fn save_config(&mut self, config: &RoloConfig) -> Result<()>;
}
