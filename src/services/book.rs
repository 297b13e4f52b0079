//! Address book service
//!
//! Owns the loaded book for the lifetime of the process. Commands run in
//! memory; the book is written back once, by [`BookService::save`].

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::commands::{dispatch, BirthdayQuery, Command, Reply};
use crate::config::{ContactsPaths, Settings};
use crate::error::ContactsResult;
use crate::models::{AddressBook, Record};
use crate::storage::BookStore;

/// Runs commands against a loaded address book
pub struct BookService {
    book: AddressBook,
    store: BookStore,
    audit: Option<AuditLogger>,
    window_days: u32,
    dirty: bool,
}

impl BookService {
    /// Load the book from the configured location
    pub fn open(paths: &ContactsPaths, settings: &Settings) -> ContactsResult<Self> {
        let store = BookStore::new(paths);
        let book = store.load()?;
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        info!(contacts = book.len(), path = %store.path().display(), "address book opened");
        Ok(Self::new(book, store, audit, settings.birthday_window_days))
    }

    /// Wrap an already-loaded book
    pub fn new(
        book: AddressBook,
        store: BookStore,
        audit: Option<AuditLogger>,
        window_days: u32,
    ) -> Self {
        Self {
            book,
            store,
            audit,
            window_days,
            dirty: false,
        }
    }

    /// The current book
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Whether the book has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run one command, auditing any change to the named contact
    pub fn execute(
        &mut self,
        command: Command,
        args: &[String],
        today: NaiveDate,
    ) -> ContactsResult<Reply> {
        let query = BirthdayQuery {
            reference_date: today,
            default_window_days: self.window_days,
        };

        if !command.is_mutating() {
            return dispatch(command, args, &mut self.book, query);
        }

        let target = args.first().cloned();
        let before = self.snapshot(target.as_deref());
        let reply = dispatch(command, args, &mut self.book, query)?;
        let after = self.snapshot(target.as_deref());

        if let Some(entry) = audit_entry(before.as_ref(), after.as_ref()) {
            debug!(command = %command, "{}", entry.format_human_readable());
            self.dirty = true;
            if let Some(logger) = &self.audit {
                if let Err(e) = logger.log(&entry) {
                    warn!(path = %logger.path().display(), error = %e, "failed to write audit entry");
                }
            }
        }

        Ok(reply)
    }

    fn snapshot(&self, name: Option<&str>) -> Option<Record> {
        name.and_then(|n| self.book.find(n)).cloned()
    }

    /// Write the book back if anything changed
    pub fn save(&mut self) -> ContactsResult<()> {
        if !self.dirty {
            debug!("no changes to save");
            return Ok(());
        }
        self.store.save(&self.book)?;
        self.dirty = false;
        info!(contacts = self.book.len(), "address book saved");
        Ok(())
    }
}

fn audit_entry(before: Option<&Record>, after: Option<&Record>) -> Option<AuditEntry> {
    match (before, after) {
        (None, Some(created)) => Some(AuditEntry::create(created)),
        (Some(old), Some(new)) if old != new => Some(AuditEntry::update(old, new)),
        (Some(removed), None) => Some(AuditEntry::delete(removed)),
        _ => None,
    }
}
