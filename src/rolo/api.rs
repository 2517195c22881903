//! # API Facade
//!
//! [`Assistant`] is the single entry point for every operation, whatever
//! front end drives it. It owns the loaded collections and the
//! write-through rule: after a command that can mutate, the touched
//! collection is persisted before the reply is returned, so the backing
//! files always reflect the last completed command.
//!
//! The facade does **not**:
//! - hold business logic (that lives in `commands/*`),
//! - print anything (the shell renders replies),
//! - format errors (callers decide presentation).
//!
//! ## Generic over DataStore
//!
//! `Assistant<S: DataStore>` works against any backend:
//! - Production: `Assistant<FileStore>`
//! - Testing: `Assistant<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::commands::config::ConfigAction;
use crate::config::RoloConfig;
use crate::error::Result;
use crate::notes::Notebook;
use crate::store::DataStore;
use log::debug;

pub struct Assistant<S: DataStore> {
    store: S,
    book: AddressBook,
    notes: Notebook,
    config: RoloConfig,
}

impl<S: DataStore> Assistant<S> {
    /// Load all collections from the store. A store that has never been
    /// written yields empty collections and default config.
    pub fn open(mut store: S) -> Result<Self> {
        let book = store.load_book()?;
        let notes = store.load_notes()?;
        let config = store.load_config()?;
        debug!(
            "opened assistant: {} contact(s), {} note(s)",
            book.len(),
            notes.len()
        );
        Ok(Assistant {
            store,
            book,
            notes,
            config,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notes(&self) -> &Notebook {
        &self.notes
    }

    pub fn config(&self) -> &RoloConfig {
        &self.config
    }

    /// Hand the store back, ending the session. Useful for inspecting
    /// what was persisted.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::contacts::add(args, &mut self.book)?;
        self.store.save_book(&self.book)?;
        Ok(reply)
    }

    pub fn change_contact(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::contacts::change(args, &mut self.book)?;
        self.store.save_book(&self.book)?;
        Ok(reply)
    }

    pub fn find_contact(&self, args: &[String]) -> Result<String> {
        commands::contacts::find(args, &self.book)
    }

    pub fn show_all_contacts(&self) -> Result<String> {
        commands::contacts::show_all(&self.book)
    }

    pub fn delete_contact(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::contacts::delete(args, &mut self.book)?;
        self.store.save_book(&self.book)?;
        Ok(reply)
    }

    pub fn add_birthday(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::birthdays::add(args, &mut self.book)?;
        self.store.save_book(&self.book)?;
        Ok(reply)
    }

    pub fn show_birthday(&self, args: &[String]) -> Result<String> {
        commands::birthdays::show(args, &self.book)
    }

    pub fn upcoming_birthdays(&self, args: &[String]) -> Result<String> {
        commands::birthdays::upcoming(args, &self.book, self.config.birthday_window)
    }

    pub fn add_note(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::notes::add(args, &mut self.notes)?;
        self.store.save_notes(&self.notes)?;
        Ok(reply)
    }

    pub fn remove_note(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::notes::remove(args, &mut self.notes)?;
        self.store.save_notes(&self.notes)?;
        Ok(reply)
    }

    pub fn edit_note(&mut self, args: &[String]) -> Result<String> {
        let reply = commands::notes::edit(args, &mut self.notes)?;
        self.store.save_notes(&self.notes)?;
        Ok(reply)
    }

    pub fn find_notes(&self, args: &[String]) -> Result<String> {
        commands::notes::find(args, &self.notes)
    }

    pub fn find_notes_by_tag(&self, args: &[String]) -> Result<String> {
        commands::notes::find_by_tag(args, &self.notes)
    }

    pub fn show_all_notes(&self) -> Result<String> {
        commands::notes::show_all(&self.notes)
    }

    pub fn configure(&mut self, args: &[String]) -> Result<String> {
        let action = ConfigAction::from_args(args)?;
        let persist = action.is_set();
        let reply = commands::config::run(&mut self.config, action)?;
        if persist {
            self.store.save_config(&self.config)?;
        }
        Ok(reply)
    }
}
