//! Address book: the keyed collection of contact records.

use super::record::ContactRecord;
use crate::domain::{Birthday, ContactName};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Width of the upcoming-birthday window after "today", inclusive.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// A birthday falling inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    /// The stored date of birth, not this year's occurrence.
    pub birthday: Birthday,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.birthday)
    }
}

/// All contacts, keyed by name.
///
/// Iteration order is unspecified. The book is persisted as a list of
/// records and rebuilt through [`AddressBook::add_record`] on load, so a
/// file carrying the same name twice merges instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ContactRecord>", into = "Vec<ContactRecord>")]
pub struct AddressBook {
    records: HashMap<ContactName, ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, or merge its phones into an existing record of the
    /// same name.
    ///
    /// On merge the existing record keeps its birthday; the incoming
    /// birthday is dropped.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.records.get_mut(record.name().as_str()) {
            Some(existing) => {
                tracing::debug!(
                    name = %existing.name(),
                    added = record.phones().len(),
                    "Merging phones into existing contact"
                );
                existing.absorb_phones(record.into_phones());
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding new contact");
                self.records.insert(record.name().clone(), record);
            }
        }
    }

    /// Exact-match lookup.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Exact-match lookup for editing a record in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove and return the record named `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            tracing::debug!(name, "Deleted contact");
        }
        removed
    }

    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday, placed in `today`'s year, falls within
    /// `today ..= today + 7 days`.
    ///
    /// The occurrence is always taken in the current year. From late
    /// December a birthday in early January is therefore not reported,
    /// even though it is less than a week away.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let this_year = birthday.occurrence_in(today.year())?;
                (today <= this_year && this_year <= window_end).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    birthday,
                })
            })
            .collect()
    }
}

impl From<Vec<ContactRecord>> for AddressBook {
    fn from(records: Vec<ContactRecord>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<ContactRecord> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}
