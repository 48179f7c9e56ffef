//! Data models for the contact book.

mod address_book;
mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::ContactRecord;
