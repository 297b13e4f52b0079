//! Field value types for contact records
//!
//! Each type validates its input at construction and is immutable afterwards.
//! Serialization goes through the textual form, so a stored value is
//! re-validated when it is read back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ContactsError, ContactsResult};

/// Textual birthday format used for both input and output (`DD.MM.YYYY`)
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Number of digits in a valid phone number
pub const PHONE_DIGITS: usize = 10;

/// A contact's name, the unique key of a record in the address book
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new name, trimming surrounding whitespace
    pub fn new(value: impl Into<String>) -> ContactsResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ContactsError::InvalidFormat(
                "Contact name cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name text
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

/// A phone number made of exactly ten decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number, validating the digit count
    pub fn new(value: impl Into<String>) -> ContactsResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ContactsError::InvalidFormat(format!(
                "Phone number must be {} digits, got '{}'",
                PHONE_DIGITS, value
            )));
        }
        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number text
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

/// A birth date parsed from `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text
    ///
    /// Day and month must be zero-padded and the year must have four digits.
    /// Impossible calendar dates such as `31.02.2020` are rejected.
    pub fn parse(value: &str) -> ContactsResult<Self> {
        let invalid = || {
            ContactsError::InvalidFormat(format!(
                "Invalid date '{}'. Use DD.MM.YYYY",
                value
            ))
        };

        if !Self::has_fixed_shape(value) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// `chrono` accepts unpadded fields, so the shape is checked up front
    fn has_fixed_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    }

    /// The same month and day placed on `year`
    ///
    /// Fails with `InvalidDate` when the date does not exist in that year,
    /// which only happens for February 29 in a non-leap year.
    pub fn to_year(&self, year: i32) -> ContactsResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).ok_or_else(|| {
            ContactsError::InvalidDate(format!("{} does not exist in {}", self, year))
        })
    }

    /// The occurrence of this birthday in `year`
    ///
    /// February 29 is celebrated on February 28 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> ContactsResult<NaiveDate> {
        match self.to_year(year) {
            Ok(date) => Ok(date),
            Err(_) if self.0.month() == 2 && self.0.day() == 29 => {
                NaiveDate::from_ymd_opt(year, 2, 28).ok_or_else(|| {
                    ContactsError::InvalidDate(format!("year {} is out of range", year))
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_trims_and_rejects_blank() {
        assert_eq!(Name::new("  Alice ").unwrap().value(), "Alice");
        assert!(Name::new("   ").unwrap_err().is_invalid_format());
        assert!(Name::new("").is_err());
    }

    #[test]
    fn test_phone_valid() {
        for s in ["0123456789", "1111111111", "9876543210"] {
            assert_eq!(Phone::new(s).unwrap().value(), s);
        }
    }

    #[test]
    fn test_phone_invalid() {
        for s in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "+380501234",
            "123 456 78",
            "１２３４５６７８９０",
        ] {
            let err = Phone::new(s).unwrap_err();
            assert!(err.is_invalid_format(), "expected rejection of {:?}", s);
        }
    }

    #[test]
    fn test_birthday_round_trips_text() {
        for s in ["01.01.2000", "29.02.2024", "31.12.1999", "09.06.1985"] {
            assert_eq!(Birthday::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_shape() {
        for s in [
            "1.1.2000",
            "01.1.2000",
            "2000-01-01",
            "01.01.00",
            "01/01/2000",
            "01.01.2000 ",
            "aa.bb.cccc",
        ] {
            assert!(
                Birthday::parse(s).unwrap_err().is_invalid_format(),
                "expected rejection of {:?}",
                s
            );
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_date() {
        assert!(Birthday::parse("31.02.2020").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("00.01.2020").is_err());
        assert!(Birthday::parse("15.13.2020").is_err());
    }

    #[test]
    fn test_to_year() {
        let birthday = Birthday::parse("12.06.1990").unwrap();
        assert_eq!(
            birthday.to_year(2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
        );
    }

    #[test]
    fn test_leap_day_to_non_leap_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        let err = birthday.to_year(2023).unwrap_err();
        assert!(matches!(err, ContactsError::InvalidDate(_)));

        assert_eq!(
            birthday.occurrence_in(2023).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            birthday.occurrence_in(2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_serde_uses_text_form() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"0501234567\"");

        let birthday = Birthday::parse("05.03.1991").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.03.1991\"");
        assert_eq!(serde_json::from_str::<Birthday>(&json).unwrap(), birthday);

        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"1991-03-05\"").is_err());
    }
}
