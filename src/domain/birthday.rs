//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual form of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date of birth parsed from `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("05.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.06.1990");
/// assert!(Birthday::parse("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, rejecting anything that is not a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on unparsable input, on a
    /// year that is not exactly four digits, and on year 0.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(value.to_string());

        // chrono's %Y also takes signs and short years
        let year = value.rsplit('.').next().unwrap_or("");
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        if date.year() == 0 {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    /// Wrap an already structured date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The stored date, including the year of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day placed in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years. Returns
    /// `None` only when `year` is outside the representable range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), 28))
    }
}

/// Validate `s` as a `DD.MM.YYYY` birthday.
pub fn validate_birthday(s: &str) -> Result<Birthday, ValidationError> {
    Birthday::parse(s)
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

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::parse("05.06.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 5).unwrap());
        assert!(Birthday::parse("29.02.2020").is_ok());
        assert!(Birthday::parse("31.12.1999").is_ok());
    }

    #[test]
    fn test_birthday_rejects_bad_dates() {
        assert!(Birthday::parse("31.02.2020").is_err());
        assert!(Birthday::parse("29.02.2021").is_err());
        assert!(Birthday::parse("1-1-2020").is_err());
        assert!(Birthday::parse("2020.01.01").is_err());
        assert!(Birthday::parse("00.01.2020").is_err());
        assert!(Birthday::parse("01.13.2020").is_err());
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("01.01.2020 extra").is_err());
    }

    #[test]
    fn test_birthday_requires_four_digit_positive_year() {
        for input in [
            "01.01.-0005",
            "01.01.+2020",
            "01.01.+202",
            "01.01.20",
            "01.01.0",
            "01.01.0000",
            "01.01.12345",
            "01.01.２０２０",
        ] {
            assert!(
                matches!(Birthday::parse(input), Err(ValidationError::InvalidBirthday(_))),
                "{} should be rejected",
                input
            );
        }

        assert_eq!(Birthday::parse("01.01.0001").unwrap().to_string(), "01.01.0001");
        assert_eq!(Birthday::parse("1.1.2020").unwrap().to_string(), "01.01.2020");
    }

    #[test]
    fn test_birthday_error_message() {
        let err = validate_birthday("1-1-2020").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_display_is_zero_padded() {
        let birthday = Birthday::from_date(NaiveDate::from_ymd_opt(2001, 3, 7).unwrap());
        assert_eq!(birthday.to_string(), "07.03.2001");
    }

    #[test]
    fn test_occurrence_in_year() {
        let birthday = Birthday::parse("05.06.1990").unwrap();
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 6, 5)
        );
    }

    #[test]
    fn test_leap_day_occurrence_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_serde_uses_display_form() {
        let birthday = Birthday::parse("05.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.06.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"1990-06-05\"");
        assert!(bad.is_err());
    }
}
