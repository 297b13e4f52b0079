//! Birthday calendar arithmetic
//!
//! Maps a birthday onto the reference year (rolling over to the next year
//! once it has passed) and moves weekend dates to the following Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

use super::fields::{Birthday, BIRTHDAY_FORMAT};
use crate::error::ContactsResult;

/// Default look-ahead window for upcoming birthdays, in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The next occurrence of `birthday` on or after `reference`
pub fn next_occurrence(birthday: &Birthday, reference: NaiveDate) -> ContactsResult<NaiveDate> {
    let this_year = birthday.occurrence_in(reference.year())?;
    if this_year < reference {
        birthday.occurrence_in(reference.year() + 1)
    } else {
        Ok(this_year)
    }
}

/// Move Saturday and Sunday forward to Monday; other days are unchanged
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// A contact whose birthday falls inside the look-ahead window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Weekend-adjusted date to congratulate on
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `DD.MM.YYYY`
    pub fn congratulation_date_text(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, congratulation date: {}",
            self.name,
            self.congratulation_date_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_occurrence_same_year() {
        let birthday = Birthday::parse("12.06.1990").unwrap();
        assert_eq!(
            next_occurrence(&birthday, date(2024, 6, 10)).unwrap(),
            date(2024, 6, 12)
        );
    }

    #[test]
    fn test_next_occurrence_on_reference_day() {
        let birthday = Birthday::parse("10.06.1990").unwrap();
        assert_eq!(
            next_occurrence(&birthday, date(2024, 6, 10)).unwrap(),
            date(2024, 6, 10)
        );
    }

    #[test]
    fn test_next_occurrence_rolls_over() {
        let birthday = Birthday::parse("01.06.1970").unwrap();
        assert_eq!(
            next_occurrence(&birthday, date(2024, 6, 10)).unwrap(),
            date(2025, 6, 1)
        );

        let new_year = Birthday::parse("02.01.2000").unwrap();
        assert_eq!(
            next_occurrence(&new_year, date(2024, 12, 29)).unwrap(),
            date(2025, 1, 2)
        );
    }

    #[test]
    fn test_next_occurrence_leap_day() {
        let birthday = Birthday::parse("29.02.1996").unwrap();
        assert_eq!(
            next_occurrence(&birthday, date(2023, 2, 25)).unwrap(),
            date(2023, 2, 28)
        );
        assert_eq!(
            next_occurrence(&birthday, date(2023, 3, 1)).unwrap(),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_shift_weekend() {
        // 2024-06-10 is a Monday
        assert_eq!(shift_weekend(date(2024, 6, 12)), date(2024, 6, 12));
        assert_eq!(shift_weekend(date(2024, 6, 14)), date(2024, 6, 14));
        assert_eq!(shift_weekend(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(shift_weekend(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(shift_weekend(date(2024, 12, 28)), date(2024, 12, 30));
    }

    #[test]
    fn test_upcoming_display() {
        let upcoming = UpcomingBirthday {
            name: "Bob".into(),
            congratulation_date: date(2024, 6, 17),
        };
        assert_eq!(
            upcoming.to_string(),
            "name: Bob, congratulation date: 17.06.2024"
        );
    }
}
