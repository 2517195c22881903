use super::DataStore;
use crate::book::AddressBook;
use crate::config::RoloConfig;
use crate::error::Result;
use crate::notes::Notebook;

/// In-memory storage backend. `None` stands for "file never written", so
/// the missing-file semantics of [`super::fs::FileStore`] hold here too.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    book: Option<AddressBook>,
    notes: Option<Notebook>,
    config: Option<RoloConfig>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the notes "file" exists yet.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&self) -> Result<AddressBook> {
        Ok(self.book.clone().unwrap_or_default())
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.book = Some(book.clone());
        Ok(())
    }

    fn load_notes(&mut self) -> Result<Notebook> {
        if self.notes.is_none() {
            self.notes = Some(Notebook::new());
        }
        Ok(self.notes.clone().unwrap_or_default())
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.notes = Some(notes.clone());
        Ok(())
    }

    fn load_config(&self) -> Result<RoloConfig> {
        Ok(self.config.clone().unwrap_or_default())
    }

    fn save_config(&mut self, config: &RoloConfig) -> Result<()> {
        self.config = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_fresh_store_loads_empty_collections() {
        let mut store = InMemoryStore::new();
        assert!(store.load_book().unwrap().is_empty());
        assert!(!store.has_notes());
        assert!(store.load_notes().unwrap().is_empty());
        // Loading notes "creates the file", as the file store does.
        assert!(store.has_notes());
    }

    #[test]
    fn test_save_then_load_book() {
        let mut store = InMemoryStore::new();
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        book.add_record(record);

        store.save_book(&book).unwrap();
        assert_eq!(store.load_book().unwrap(), book);
    }

    #[test]
    fn test_save_then_load_notes() {
        let mut store = InMemoryStore::new();
        let mut notes = Notebook::new();
        notes.add_note("t", "c", vec![]);

        store.save_notes(&notes).unwrap();
        assert_eq!(store.load_notes().unwrap(), notes);
    }
}
