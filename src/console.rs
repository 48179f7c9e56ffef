//! Console I/O for the interactive assistant.
//!
//! The dispatcher and session only talk to the [`Console`] trait. The
//! terminal implementation colours replies by tone; tests substitute a
//! scripted console.

use crate::commands::{Reply, Tone};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Line-oriented user interaction.
pub trait Console {
    /// Show `prompt` and wait for one line. `None` means input has ended.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Present a reply to the user.
    fn show(&mut self, reply: &Reply);
}

/// Console over a reader and a writer, normally stdin and stdout.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_text(&mut self, text: &str) {
        // A closed stdout leaves nothing useful to report to.
        if let Err(e) = write!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            tracing::debug!(error = %e, "Failed to write to console");
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.write_text(&prompt.yellow().to_string());

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from console");
                None
            }
        }
    }

    fn show(&mut self, reply: &Reply) {
        let text = match reply.tone {
            Tone::Success => reply.text.green().to_string(),
            Tone::Error => reply.text.red().to_string(),
            Tone::Info => reply.text.yellow().to_string(),
            Tone::Plain => reply.text.clone(),
        };
        self.write_text(&format!("{}\n", text));
    }
}
