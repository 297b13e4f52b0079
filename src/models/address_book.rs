//! Address book model
//!
//! An ordered, name-keyed container of contact records. The key of every
//! entry is always the record's own name. Lookups trim the key the same way
//! [`Name::new`](super::fields::Name::new) does, so a padded argument finds
//! the stored contact.

use chrono::NaiveDate;
use tracing::warn;

use super::calendar::{next_occurrence, shift_weekend, UpcomingBirthday};
use super::record::Record;

/// All contacts, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim();
        self.records.iter().position(|r| r.name().value() == key)
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// A replaced record keeps its position in the iteration order.
    /// Returns the record that was replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().value()) {
            Some(idx) => Some(std::mem::replace(&mut self.records[idx], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    /// Look up a record by name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|idx| &mut self.records[idx])
    }

    /// Remove a record by name; absent names are a no-op
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|idx| self.records.remove(idx))
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no contacts
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Iterate over contact names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().value())
    }

    /// One summary line per contact, in insertion order
    pub fn list_all(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(Record::to_string)
    }

    /// Contacts whose next birthday is within `window_days` of `reference`
    ///
    /// Results follow the book's iteration order, not date order. Weekend
    /// birthdays are reported on the following Monday.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = match next_occurrence(birthday, reference) {
                    Ok(date) => date,
                    Err(e) => {
                        warn!(contact = %record.name(), error = %e, "skipping birthday");
                        return None;
                    }
                };

                let delta = (occurrence - reference).num_days();
                if !(0..=i64::from(window_days)).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().value().to_string(),
                    congratulation_date: shift_weekend(occurrence),
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
