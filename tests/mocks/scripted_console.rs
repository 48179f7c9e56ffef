use contact_book::commands::{Reply, Tone};
use contact_book::console::Console;
use std::collections::VecDeque;

/// Console that feeds pre-written lines and records everything shown.
///
/// Running out of lines behaves like end of input.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
    pub shown: Vec<Reply>,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
            shown: Vec::new(),
        }
    }

    /// Texts of every reply shown, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.shown.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether a reply with exactly `text` and `tone` was shown.
    pub fn saw(&self, tone: Tone, text: &str) -> bool {
        self.shown.iter().any(|r| r.tone == tone && r.text == text)
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }

    fn show(&mut self, reply: &Reply) {
        self.shown.push(reply.clone());
    }
}
