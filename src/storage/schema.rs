//! On-disk schema of the address book
//!
//! The book is stored as an ordered list of records, each with a name, its
//! phones and an optional birthday. Every field is re-validated on load.

use serde::{Deserialize, Serialize};

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Birthday, Name, Phone, Record};

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Serializable address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookData {
    pub schema_version: u32,
    #[serde(default)]
    pub records: Vec<RecordData>,
}

/// Serializable contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl From<&Record> for RecordData {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().clone(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut record = Record::with_name(data.name);
        for phone in data.phones {
            record.push_phone(phone);
        }
        record.set_birthday(data.birthday);
        record
    }
}

impl From<&AddressBook> for BookData {
    fn from(book: &AddressBook) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            records: book.records().map(RecordData::from).collect(),
        }
    }
}

impl TryFrom<BookData> for AddressBook {
    type Error = ContactsError;

    fn try_from(data: BookData) -> Result<Self, Self::Error> {
        if data.schema_version != SCHEMA_VERSION {
            return Err(ContactsError::Storage(format!(
                "Unsupported address book schema version {} (expected {})",
                data.schema_version, SCHEMA_VERSION
            )));
        }
        Ok(data.records.into_iter().map(Record::from).collect())
    }
}

/// Serialize the whole address book into JSON bytes
pub fn serialize(book: &AddressBook) -> ContactsResult<Vec<u8>> {
    serde_json::to_vec_pretty(&BookData::from(book))
        .map_err(|e| ContactsError::Storage(format!("Failed to serialize address book: {}", e)))
}

/// Restore an address book from bytes produced by [`serialize`]
pub fn deserialize(bytes: &[u8]) -> ContactsResult<AddressBook> {
    let data: BookData = serde_json::from_slice(bytes)
        .map_err(|e| ContactsError::Storage(format!("Failed to parse address book: {}", e)))?;
    AddressBook::try_from(data)
}
