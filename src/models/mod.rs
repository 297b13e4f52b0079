//! Core data models for the contact book
//!
//! This module contains the data structures that represent the address book
//! domain: field value types, contact records, the book itself and the
//! birthday calendar arithmetic.

pub mod address_book;
pub mod calendar;
pub mod fields;
pub mod record;

pub use address_book::AddressBook;
pub use calendar::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use fields::{Birthday, Name, Phone, BIRTHDAY_FORMAT};
pub use record::Record;
