//! Command boundary
//!
//! Text commands are parsed into a [`Command`] plus its arguments and
//! dispatched to the handlers, which return a reply or a typed error. The
//! caller decides how to present either.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{ContactsError, ContactsResult};
use crate::models::AddressBook;

/// A command understood by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Every command word accepted by [`Command::from_str`]
    pub const WORDS: &'static [&'static str] = &[
        "hello",
        "add",
        "change",
        "phone",
        "delete",
        "all",
        "add-birthday",
        "show-birthday",
        "birthdays",
        "close",
        "exit",
    ];

    /// Whether the command can change the address book
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::Delete | Self::AddBirthday
        )
    }
}

impl FromStr for Command {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "phone" => Ok(Self::Phone),
            "delete" => Ok(Self::Delete),
            "all" => Ok(Self::All),
            "add-birthday" => Ok(Self::AddBirthday),
            "show-birthday" => Ok(Self::ShowBirthday),
            "birthdays" => Ok(Self::Birthdays),
            "close" | "exit" => Ok(Self::Exit),
            other => Err(ContactsError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::Delete => "delete",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        };
        f.write_str(word)
    }
}

/// Split a line into a lowercased command word and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.map(str::to_string).collect()))
}

/// How a successful reply should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something was changed
    Success,
    /// Plain query output
    Info,
}

/// A handler's successful result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub tone: Tone,
}

impl Reply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Info,
        }
    }
}

/// Inputs to `birthdays` that come from outside the book
#[derive(Debug, Clone, Copy)]
pub struct BirthdayQuery {
    /// The day treated as "today"
    pub reference_date: NaiveDate,
    /// Window used when the command gives no explicit day count
    pub default_window_days: u32,
}

/// Run one command against the book
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    query: BirthdayQuery,
) -> ContactsResult<Reply> {
    match command {
        Command::Hello => handlers::hello(args).map(Reply::info),
        Command::Add => handlers::add_contact(args, book).map(Reply::success),
        Command::Change => handlers::change_contact(args, book).map(Reply::success),
        Command::Phone => handlers::show_phone(args, book).map(Reply::info),
        Command::Delete => handlers::delete_contact(args, book).map(Reply::success),
        Command::All => handlers::show_all(args, book).map(Reply::info),
        Command::AddBirthday => handlers::add_birthday(args, book).map(Reply::success),
        Command::ShowBirthday => handlers::show_birthday(args, book).map(Reply::info),
        Command::Birthdays => handlers::birthdays(args, book, query).map(Reply::info),
        Command::Exit => Ok(Reply::info("Good bye!")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (command, args) = parse_input("  ADD Alice   0501234567 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, ["Alice", "0501234567"]);

        let (command, args) = parse_input("all").unwrap();
        assert_eq!(command, "all");
        assert!(args.is_empty());

        assert!(parse_input("").is_none());
        assert!(parse_input("   \t").is_none());
    }

    #[test]
    fn test_command_words_round_trip() {
        for word in Command::WORDS {
            let command: Command = word.parse().unwrap();
            if *word != "close" {
                assert_eq!(command.to_string(), *word);
            }
        }
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
    }

    #[test]
    fn test_unknown_command() {
        let err = "fly".parse::<Command>().unwrap_err();
        assert!(matches!(err, ContactsError::UnknownCommand(ref c) if c == "fly"));
        assert_eq!(err.to_string(), "Invalid command: fly");
    }

    #[test]
    fn test_mutating_commands() {
        assert!(Command::Add.is_mutating());
        assert!(Command::AddBirthday.is_mutating());
        assert!(!Command::Phone.is_mutating());
        assert!(!Command::Birthdays.is_mutating());
    }

    #[test]
    fn test_dispatch_tones() {
        let mut book = AddressBook::new();
        let query = BirthdayQuery {
            reference_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            default_window_days: 7,
        };
        let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let reply = dispatch(Command::Add, &args(&["Alice", "0501234567"]), &mut book, query)
            .unwrap();
        assert_eq!(reply.tone, Tone::Success);

        let reply = dispatch(Command::Phone, &args(&["Alice"]), &mut book, query).unwrap();
        assert_eq!(reply, Reply::info("0501234567"));
    }
}
