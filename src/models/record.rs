//! Contact record: one named person with phones and an optional birthday.

use crate::domain::{
    validate_birthday, validate_phone, Birthday, ContactName, PhoneNumber, ValidationError,
};
use crate::error::RecordError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation and is the record's key in an
/// [`AddressBook`](super::AddressBook). Phones keep insertion order and
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create an empty record, validating the raw name.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number.
    ///
    /// The record is left untouched when validation fails.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = validate_phone(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Returns whether one was found.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before anything else; an invalid value is an
    /// error even when `old` is absent. Returns whether `old` was found.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = validate_phone(new)?;
        match self.phones.iter().position(|p| p == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(validate_birthday(birthday)?);
        Ok(())
    }

    /// Days from the local calendar date until the next birthday.
    pub fn days_to_birthday(&self) -> Result<i64, RecordError> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month/day.
    ///
    /// A birthday falling on `today` counts as 0, not a full year away.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Result<i64, RecordError> {
        let birthday = self.birthday.ok_or(RecordError::BirthdayNotSet)?;

        let mut next = birthday
            .occurrence_in(today.year())
            .ok_or(RecordError::DateOutOfRange)?;
        if next < today {
            next = birthday
                .occurrence_in(today.year() + 1)
                .ok_or(RecordError::DateOutOfRange)?;
        }

        Ok((next - today).num_days())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Append already validated phones; birthdays are never merged.
    pub(crate) fn absorb_phones(&mut self, phones: Vec<PhoneNumber>) {
        self.phones.extend(phones);
    }

    pub(crate) fn into_phones(self) -> Vec<PhoneNumber> {
        self.phones
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phones_display())?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
