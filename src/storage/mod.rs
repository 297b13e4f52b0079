//! Storage layer for the contact book
//!
//! The whole address book is read at start and written back as one unit.
//! [`serialize`] and [`deserialize`] define the on-disk bytes; the file is
//! replaced atomically.

pub mod file_io;
pub mod schema;

pub use file_io::{read_bytes, write_atomic, write_json_atomic};
pub use schema::{deserialize, serialize, BookData, RecordData, SCHEMA_VERSION};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::paths::ContactsPaths;
use crate::error::ContactsError;
use crate::models::AddressBook;

/// Loads and saves the address book file
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Create a store for the book file under `paths`
    pub fn new(paths: &ContactsPaths) -> Self {
        Self::at(paths.book_file())
    }

    /// Create a store for an explicit file path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the book file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book; a missing file yields an empty book
    pub fn load(&self) -> Result<AddressBook, ContactsError> {
        let book = match read_bytes(&self.path)? {
            Some(bytes) => deserialize(&bytes)?,
            None => AddressBook::new(),
        };
        debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    /// Save the whole book atomically
    pub fn save(&self, book: &AddressBook) -> Result<(), ContactsError> {
        write_atomic(&self.path, &serialize(book)?)?;
        debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = BookStore::new(&paths);

        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().join("book"));
        let store = BookStore::new(&paths);

        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_birthday("12.06.1990").unwrap();
        book.add_record(record);

        store.save(&book).unwrap();
        assert_eq!(BookStore::new(&paths).load().unwrap(), book);
    }

    #[test]
    fn test_file_holds_serialized_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let store = BookStore::at(temp_dir.path().join("addressbook.json"));

        let mut book = AddressBook::new();
        let mut record = Record::new("Bob").unwrap();
        record.add_phone("2222222222").unwrap();
        book.add_record(record);

        store.save(&book).unwrap();
        let on_disk = std::fs::read(store.path()).unwrap();
        assert_eq!(on_disk, serialize(&book).unwrap());
        assert_eq!(deserialize(&on_disk).unwrap(), book);
    }

    #[test]
    fn test_load_rejects_invalid_stored_phone() {
        let temp_dir = TempDir::new().unwrap();
        let store = BookStore::at(temp_dir.path().join("addressbook.json"));
        std::fs::write(
            store.path(),
            r#"{"schema_version":1,"records":[{"name":"Bob","phones":["12"],"birthday":null}]}"#,
        )
        .unwrap();

        assert!(matches!(store.load(), Err(ContactsError::Storage(_))));
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = BookStore::at(temp_dir.path().join("addressbook.json"));
        std::fs::write(store.path(), "garbage").unwrap();

        assert!(matches!(store.load(), Err(ContactsError::Storage(_))));
    }
}
