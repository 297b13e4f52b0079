//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// A name, phone number or birthday was rejected at construction
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A birthday cannot be placed on the requested year
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A command received the wrong number of arguments
    #[error("Invalid input. {0}")]
    InvalidArguments(String),

    /// The command word is not recognized
    #[error("Invalid command: {0}")]
    UnknownCommand(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for phone numbers
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone number",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for birthdays
    pub fn birthday_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Birthday",
            identifier: identifier.into(),
        }
    }

    /// Create a usage error for a command called with the wrong arguments
    pub fn usage(usage: &str) -> Self {
        Self::InvalidArguments(format!("Please use the format: {}", usage))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a format validation error
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactsResult<T> = Result<T, ContactsError>;
