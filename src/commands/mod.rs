//! Command handling for the interactive assistant.
//!
//! Raw lines are split by the parser, routed by the dispatcher, and every
//! result comes back as a [`Reply`] for the console to render.

pub mod dispatcher;
pub mod parser;
pub mod reply;

pub use dispatcher::{Dispatcher, Outcome, EMPTY_INPUT, INVALID_COMMAND};
pub use parser::{parse_input, CommandKind, ParsedInput};
pub use reply::{Reply, Tone};
