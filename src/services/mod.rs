//! Service layer for the contact book
//!
//! The service layer runs commands against the in-memory book and takes
//! care of the surrounding bookkeeping: audit entries and persistence.

pub mod book;

pub use book::BookService;
