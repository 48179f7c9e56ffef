//! Interactive session: the read-dispatch loop around one address book.
//!
//! A session is RUNNING from the moment the book is loaded until `close`,
//! `exit` or end of input, at which point the book is saved and the
//! session is TERMINATED for good.

use crate::commands::{Dispatcher, Outcome, Reply};
use crate::console::Console;
use crate::models::AddressBook;
use crate::repositories::{BookRepository, LoadOutcome};

pub const WELCOME: &str = "Welcome to the assistant bot!";

pub const MENU: &str = "Supported Commands Menu:
# - hello --->         Greetings from Bot
# - add --->           Adding name and phone (Name Phone)
# - change --->        Edit, delete, phone (Name)
# - delete --->        Delete contact completely (Name)
# - phone --->         Show contact phone (Name)
# - all --->           Show all contacts
# - add-birthday --->  Add birthday to contact (Name Date)
# - show-birthday ---> Show contact's birthday (Name)
# - birthdays --->     Birthdays next 7 days
# - close / exit --->  Save and quit";

pub const COMMAND_PROMPT: &str = "Enter a command: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Owns the address book for the lifetime of one interactive run.
pub struct Session<R: BookRepository> {
    book: AddressBook,
    repository: R,
    dispatcher: Dispatcher,
    load_outcome: LoadOutcome,
    state: SessionState,
}

impl<R: BookRepository> Session<R> {
    /// Load the book from `repository` and start RUNNING.
    pub fn open(repository: R, dispatcher: Dispatcher) -> Self {
        let (book, load_outcome) = repository.load();
        Self {
            book,
            repository,
            dispatcher,
            load_outcome,
            state: SessionState::Running,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle one input line. Lines arriving after termination are ignored.
    pub fn step(&mut self, line: &str, console: &mut dyn Console) -> SessionState {
        if self.state == SessionState::Terminated {
            return self.state;
        }

        match self.dispatcher.dispatch(line, &mut self.book, console) {
            Outcome::Reply(reply) => console.show(&reply),
            Outcome::Exit => self.terminate(console),
        }
        self.state
    }

    /// Save the book and stop. A failed save is reported, never fatal.
    pub fn terminate(&mut self, console: &mut dyn Console) {
        if self.state == SessionState::Terminated {
            return;
        }

        match self.repository.save(&self.book) {
            Ok(()) => console.show(&Reply::success("Data saved.")),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save address book");
                console.show(&Reply::error(format!("Failed to save data: {}", e)));
            }
        }
        console.show(&Reply::info("Good bye!"));
        self.state = SessionState::Terminated;
    }

    /// Greet, then read and handle commands until the session terminates.
    ///
    /// End of input is treated like `exit`.
    pub fn run(&mut self, console: &mut dyn Console) {
        if self.load_outcome.is_warning() {
            console.show(&Reply::error(self.load_outcome.to_string()));
        }
        console.show(&Reply::info(WELCOME));
        console.show(&Reply::plain(MENU));

        while self.state == SessionState::Running {
            match console.read_line(COMMAND_PROMPT) {
                Some(line) => {
                    self.step(&line, console);
                }
                None => {
                    tracing::info!("Input closed, ending session");
                    self.terminate(console);
                }
            }
        }
    }
}
