//! Command dispatcher - routes parsed input to address book operations.
//!
//! Every user-input failure (missing argument, unknown contact, invalid
//! phone or date) ends as a [`CommandError`] and is turned into a reply
//! here. Nothing past [`Dispatcher::dispatch`] sees those errors.

use super::parser::{parse_input, CommandKind};
use super::reply::Reply;
use crate::console::Console;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, ContactRecord, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
use chrono::{Local, NaiveDate};

/// Reply to a line that has no command in it.
pub const EMPTY_INPUT: &str = "Please enter a command.";

/// Reply to an unknown command.
pub const INVALID_COMMAND: &str = "Invalid command.
Did you mean one of these:
add, change, delete, phone, all, add-birthday, show-birthday, birthdays.";

const ENTER_USER_NAME: &str = "Enter user name.";
const ADD_USAGE: &str = "Please provide name and phone please, separated by a space.";
const ADD_BIRTHDAY_USAGE: &str = "Please provide name and date of birth, separated by a space.";
const CHANGE_USAGE: &str = "Please provide the contact name.";

/// What the session should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the reply and keep reading commands.
    Reply(Reply),
    /// `close` or `exit` was entered.
    Exit,
}

/// Maps input lines to address book operations.
///
/// Holds no state between commands. The date used for the upcoming
/// birthday report is the local date unless pinned with [`Dispatcher::with_today`].
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    today: Option<NaiveDate>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin "today" for the birthday report.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Handle one input line against `book`.
    ///
    /// `console` is used only by commands that need follow-up prompts.
    pub fn dispatch(
        &self,
        line: &str,
        book: &mut AddressBook,
        console: &mut dyn Console,
    ) -> Outcome {
        let Some(input) = parse_input(line) else {
            return Outcome::Reply(Reply::plain(EMPTY_INPUT));
        };

        let Some(kind) = CommandKind::from_name(&input.command) else {
            tracing::debug!(command = %input.command, "Unknown command");
            return Outcome::Reply(Reply::error(INVALID_COMMAND));
        };

        match self.execute(kind, &input.args, book, console) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(command = %kind, error = ?e, "Command failed");
                Outcome::Reply(Reply::error(e.to_string()))
            }
        }
    }

    fn execute(
        &self,
        kind: CommandKind,
        args: &[String],
        book: &mut AddressBook,
        console: &mut dyn Console,
    ) -> CommandResult<Outcome> {
        let reply = match kind {
            CommandKind::Exit => return Ok(Outcome::Exit),
            CommandKind::Hello => Reply::info("How can I help you?"),
            CommandKind::Add => add_contact(args, book)?,
            CommandKind::Change => change_contact(args, book, console)?,
            CommandKind::Delete => delete_contact(args, book)?,
            CommandKind::Phone => show_phones(args, book)?,
            CommandKind::All => show_all(book),
            CommandKind::AddBirthday => add_birthday(args, book)?,
            CommandKind::ShowBirthday => show_birthday(args, book)?,
            CommandKind::Birthdays => upcoming_birthdays(book, self.today()),
        };
        Ok(Outcome::Reply(reply))
    }
}

fn first_arg<'a>(args: &'a [String], usage: &'static str) -> CommandResult<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument(usage))
}

fn two_args<'a>(args: &'a [String], usage: &'static str) -> CommandResult<(&'a str, &'a str)> {
    match args {
        [first, second, ..] => Ok((first.as_str(), second.as_str())),
        _ => Err(CommandError::MissingArgument(usage)),
    }
}

fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let (name, phone) = two_args(args, ADD_USAGE)?;

    let mut record = ContactRecord::named(name)?;
    record.add_phone(phone)?;
    book.add_record(record);

    Ok(Reply::success(format!("Contact {} added with phone {}.", name, phone)))
}

fn change_contact(
    args: &[String],
    book: &mut AddressBook,
    console: &mut dyn Console,
) -> CommandResult<Reply> {
    let name = first_arg(args, CHANGE_USAGE)?;
    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;

    if record.phones().is_empty() {
        return Err(CommandError::NoPhones(name.to_string()));
    }

    let listing = record
        .phones()
        .iter()
        .enumerate()
        .map(|(i, phone)| format!("{}. {}", i + 1, phone))
        .collect::<Vec<_>>()
        .join("\n");
    console.show(&Reply::plain(format!("Current phones for {}:\n{}", name, listing)));

    let selection = console
        .read_line("Enter the number of the phone you want to change (e.g., 1): ")
        .ok_or(CommandError::Cancelled)?;
    let index = selection
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=record.phones().len()).contains(n))
        .ok_or(CommandError::InvalidSelection)?;
    let old = record.phones()[index - 1].to_string();

    let new = console
        .read_line(&format!(
            "Enter the new phone number for {} (or leave blank to remove): ",
            old
        ))
        .ok_or(CommandError::Cancelled)?;
    let new = new.trim();

    if new.is_empty() {
        record.remove_phone(&old);
        return Ok(Reply::success(format!("Phone {} removed.", old)));
    }

    if record.edit_phone(&old, new)? {
        Ok(Reply::success(format!("Phone {} updated to {}.", old, new)))
    } else {
        Ok(Reply::error(format!("Phone {} not found.", old)))
    }
}

fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = first_arg(args, ENTER_USER_NAME)?;
    book.delete(name).ok_or(CommandError::NotFound)?;
    Ok(Reply::success(format!("Contact {} deleted.", name)))
}

fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<Reply> {
    let name = first_arg(args, ENTER_USER_NAME)?;
    let record = book.find(name).ok_or(CommandError::NotFound)?;
    Ok(Reply::success(format!("Phones for {}: {}", name, record.phones_display())))
}

fn show_all(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Reply::error("Address book is empty.");
    }

    let mut records: Vec<&ContactRecord> = book.records().collect();
    records.sort_by(|a, b| a.name().cmp(b.name()));
    Reply::plain(
        records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let (name, birthday) = two_args(args, ADD_BIRTHDAY_USAGE)?;
    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;
    record.add_birthday(birthday)?;
    Ok(Reply::success(format!("Birthday for {} added.", name)))
}

fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<Reply> {
    let name = first_arg(args, ENTER_USER_NAME)?;
    let birthday = book
        .find(name)
        .and_then(ContactRecord::birthday)
        .ok_or(CommandError::NoBirthday)?;
    Ok(Reply::success(format!("{}'s birthday is on {}.", name, birthday)))
}

fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Reply {
    let mut upcoming: Vec<UpcomingBirthday> = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Reply::info(format!(
            "No upcoming birthdays in the next {} days.",
            UPCOMING_WINDOW_DAYS
        ));
    }

    upcoming.sort_by(|a, b| a.name.cmp(&b.name));
    let lines = upcoming
        .iter()
        .map(UpcomingBirthday::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Reply::info(format!("Upcoming birthdays:\n{}", lines))
}
