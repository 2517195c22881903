use super::DataStore;
use crate::book::AddressBook;
use crate::config::RoloConfig;
use crate::error::{Result, RoloError};
use crate::notes::Notebook;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

const BOOK_FILENAME: &str = "addressbook.json";
const NOTES_FILENAME: &str = "notes.json";

/// File-backed storage rooted at one explicit data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn book_path(&self) -> PathBuf {
        self.data_dir.join(BOOK_FILENAME)
    }

    fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(RoloError::Io)?;
        }
        Ok(())
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path).map_err(RoloError::Io)?;
        serde_json::from_str(&content).map_err(RoloError::Serialization)
    }

    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(RoloError::Serialization)?;
        fs::write(path, content).map_err(RoloError::Io)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<AddressBook> {
        let path = self.book_path();
        if !path.exists() {
            debug!("{} missing, starting with an empty book", path.display());
            return Ok(AddressBook::new());
        }
        self.read_document(&path)
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.write_document(&self.book_path(), book)
    }

    fn load_notes(&mut self) -> Result<Notebook> {
        let path = self.notes_path();
        if !path.exists() {
            debug!("{} missing, creating an empty notebook", path.display());
            let notes = Notebook::new();
            self.save_notes(&notes)?;
            return Ok(notes);
        }
        self.read_document(&path)
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.write_document(&self.notes_path(), notes)
    }

    fn load_config(&self) -> Result<RoloConfig> {
        RoloConfig::load(&self.data_dir)
    }

    fn save_config(&mut self, config: &RoloConfig) -> Result<()> {
        config.save(&self.data_dir)
    }
}
