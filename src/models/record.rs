//! Contact record model
//!
//! A record is one contact: an immutable name, an ordered list of phone
//! numbers and an optional birthday.

use serde::Serialize;
use std::fmt;

use super::fields::{Birthday, Name, Phone};
use crate::error::{ContactsError, ContactsResult};

/// A single contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,

    /// Phone numbers in insertion order; duplicates are allowed
    phones: Vec<Phone>,

    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: &str) -> ContactsResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already-validated name
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if set
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> ContactsResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Append an already-validated phone number
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `phone`
    ///
    /// Returns how many entries were removed; zero is not an error.
    pub fn del_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.value() != phone);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// `new` is validated before the scan. Returns `Ok(false)` when no
    /// stored phone matches `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactsResult<bool> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.value() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find a stored phone by its value
    pub fn find_phone(&self, phone: &str) -> ContactsResult<&Phone> {
        self.phones
            .iter()
            .find(|p| p.value() == phone)
            .ok_or_else(|| ContactsError::phone_not_found(phone))
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, birthday: &str) -> ContactsResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Set an already-validated birthday
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Comma-joined phone numbers
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone(s): {}, Birthday: ",
            self.name,
            self.phones_joined()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("None"),
        }
    }
}
