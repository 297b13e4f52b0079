//! contact-book - Terminal address book with birthday reminders
//!
//! This library provides the core functionality for the `contacts` command:
//! an address book of named contacts with phone numbers and birthdays, and
//! a query for birthdays coming up in the next few days.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Field value types, contact records, the address book and
//!   birthday calendar arithmetic
//! - `commands`: Text command parsing and handlers
//! - `services`: Runs commands against the loaded book, with auditing
//! - `storage`: JSON schema and file storage for the whole book
//! - `config`: Configuration and path management
//! - `audit`: Audit logging of contact changes
//! - `display`: Terminal output formatting
//! - `cli`: Subcommands and the interactive shell
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use contact_book::models::{AddressBook, Record};
//!
//! let mut alice = Record::new("Alice")?;
//! alice.add_phone("0501234567")?;
//! alice.add_birthday("15.06.1990")?;
//!
//! let mut book = AddressBook::new();
//! book.add_record(alice);
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let upcoming = book.upcoming_birthdays(monday, 7);
//! assert_eq!(upcoming[0].congratulation_date_text(), "17.06.2024");
//! # Ok::<(), contact_book::ContactsError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactsError, ContactsResult};
