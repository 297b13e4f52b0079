//! Command handlers
//!
//! Each handler takes the command's arguments and the address book and
//! returns the text to show, or an error describing what went wrong.

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Phone, Record};

use super::BirthdayQuery;

fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &str,
) -> ContactsResult<[&'a str; N]> {
    if args.len() != N {
        return Err(ContactsError::usage(usage));
    }
    Ok(std::array::from_fn(move |i| args[i].as_str()))
}

/// `hello`
pub fn hello(args: &[String]) -> ContactsResult<String> {
    let [] = expect_args::<0>(args, "hello")?;
    Ok("How can I help you?".to_string())
}

/// `add [name] [phone]`
///
/// Creates the contact, or appends the phone to an existing contact.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, phone] = expect_args(args, "add [name] [phone]")?;
    let phone = Phone::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.push_phone(phone);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change [name] [old phone] [new phone]`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, old_phone, new_phone] =
        expect_args(args, "change [name] [old phone] [new phone]")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactsError::contact_not_found(name))?;

    if record.edit_phone(old_phone, new_phone)? {
        Ok("Contact updated.".to_string())
    } else {
        Err(ContactsError::phone_not_found(old_phone))
    }
}

/// `phone [name]`
pub fn show_phone(args: &[String], book: &AddressBook) -> ContactsResult<String> {
    let [name] = expect_args(args, "phone [name]")?;
    let record = book
        .find(name)
        .ok_or_else(|| ContactsError::contact_not_found(name))?;

    if record.phones().is_empty() {
        Ok(format!("{} has no phone numbers.", record.name()))
    } else {
        Ok(record.phones_joined())
    }
}

/// `delete [name]`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name] = expect_args(args, "delete [name]")?;
    book.delete(name)
        .map(|_| "Contact deleted.".to_string())
        .ok_or_else(|| ContactsError::contact_not_found(name))
}

/// `all`
pub fn show_all(args: &[String], book: &AddressBook) -> ContactsResult<String> {
    let [] = expect_args::<0>(args, "all")?;
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }
    Ok(book.list_all().collect::<Vec<_>>().join("\n"))
}

/// `add-birthday [name] [DD.MM.YYYY]`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> ContactsResult<String> {
    let [name, birthday] = expect_args(args, "add-birthday [name] [DD.MM.YYYY]")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| ContactsError::contact_not_found(name))?;

    record.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}", record.name()))
}

/// `show-birthday [name]`
pub fn show_birthday(args: &[String], book: &AddressBook) -> ContactsResult<String> {
    let [name] = expect_args(args, "show-birthday [name]")?;
    let record = book
        .find(name)
        .ok_or_else(|| ContactsError::contact_not_found(name))?;
    let birthday = record
        .birthday()
        .ok_or_else(|| ContactsError::birthday_not_found(name))?;

    Ok(format!("Birthday of {}: {}", record.name(), birthday))
}

/// `birthdays [days]`
pub fn birthdays(
    args: &[String],
    book: &AddressBook,
    query: BirthdayQuery,
) -> ContactsResult<String> {
    const USAGE: &str = "birthdays [days]";

    let window_days = match args {
        [] => query.default_window_days,
        [days] => days.parse().map_err(|_| ContactsError::usage(USAGE))?,
        _ => return Err(ContactsError::usage(USAGE)),
    };

    let upcoming = book.upcoming_birthdays(query.reference_date, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
