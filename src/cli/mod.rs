//! CLI command handlers
//!
//! Bridges the clap argument parsing and the interactive shell with the
//! command boundary and the book service.

pub mod shell;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::commands::{Command, Reply};
use crate::error::ContactsResult;
use crate::services::BookService;

pub use shell::run_shell;

/// One-shot contact subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ContactCommands {
    /// Add a contact, or another phone number to an existing contact
    Add {
        /// Contact name
        name: String,
        /// Phone number (10 digits)
        phone: String,
    },
    /// Replace one of a contact's phone numbers
    Change {
        /// Contact name
        name: String,
        /// Phone number to replace
        old_phone: String,
        /// New phone number (10 digits)
        new_phone: String,
    },
    /// Show a contact's phone numbers
    Phone {
        /// Contact name
        name: String,
    },
    /// Delete a contact
    Delete {
        /// Contact name
        name: String,
    },
    /// List all contacts
    All,
    /// Set a contact's birthday
    AddBirthday {
        /// Contact name
        name: String,
        /// Birthday (DD.MM.YYYY)
        birthday: String,
    },
    /// Show a contact's birthday
    ShowBirthday {
        /// Contact name
        name: String,
    },
    /// List birthdays coming up soon
    Birthdays {
        /// Days to look ahead (defaults to the configured window)
        #[arg(short, long)]
        days: Option<u32>,
    },
}

impl ContactCommands {
    /// The equivalent shell command and its arguments
    pub fn into_invocation(self) -> (Command, Vec<String>) {
        match self {
            Self::Add { name, phone } => (Command::Add, vec![name, phone]),
            Self::Change {
                name,
                old_phone,
                new_phone,
            } => (Command::Change, vec![name, old_phone, new_phone]),
            Self::Phone { name } => (Command::Phone, vec![name]),
            Self::Delete { name } => (Command::Delete, vec![name]),
            Self::All => (Command::All, Vec::new()),
            Self::AddBirthday { name, birthday } => (Command::AddBirthday, vec![name, birthday]),
            Self::ShowBirthday { name } => (Command::ShowBirthday, vec![name]),
            Self::Birthdays { days } => (
                Command::Birthdays,
                days.map(|d| d.to_string()).into_iter().collect(),
            ),
        }
    }
}

/// Handle a one-shot contact command, saving the book if it changed
pub fn handle_contact_command(
    service: &mut BookService,
    cmd: ContactCommands,
    today: NaiveDate,
) -> ContactsResult<Reply> {
    let (command, args) = cmd.into_invocation();
    let reply = service.execute(command, &args, today)?;
    service.save()?;
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_invocation() {
        let (command, args) = ContactCommands::Change {
            name: "Alice".into(),
            old_phone: "1111111111".into(),
            new_phone: "2222222222".into(),
        }
        .into_invocation();
        assert_eq!(command, Command::Change);
        assert_eq!(args, ["Alice", "1111111111", "2222222222"]);

        let (command, args) = ContactCommands::Birthdays { days: None }.into_invocation();
        assert_eq!(command, Command::Birthdays);
        assert!(args.is_empty());

        let (_, args) = ContactCommands::Birthdays { days: Some(30) }.into_invocation();
        assert_eq!(args, ["30"]);
    }
}
