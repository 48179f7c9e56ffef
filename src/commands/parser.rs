//! Command line parser - splits raw input into a command and its arguments.

use std::fmt;

/// The commands the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Change,
    Delete,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl CommandKind {
    /// Look up a command by its lowercased name.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "delete" => Self::Delete,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-blank input line split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, lowercased.
    pub command: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

/// Split a line into a lowercased command and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}
