//! Terminal implementation of the engine's [`Table`].
//!
//! Hit decisions are read line by line from the input stream; every table
//! event is rendered as one line on the output stream.

use std::io::{BufRead, Write};

use blackjack_engine::table::{HandView, Table, TableEvent};

use crate::formatters::{format_hand, format_outcome};
use crate::io_utils::prompt;
use crate::validation::is_yes;

pub struct ConsoleTable<'a> {
    stdin: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    input_closed: bool,
    failure: Option<std::io::Error>,
}

impl<'a> ConsoleTable<'a> {
    pub fn new(stdin: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self {
            stdin,
            out,
            input_closed: false,
            failure: None,
        }
    }

    /// True once a prompt has hit EOF. Later hit prompts are answered "stand".
    pub fn input_closed(&self) -> bool {
        self.input_closed
    }

    /// The first write error seen during the round, if any.
    pub fn take_failure(&mut self) -> Option<std::io::Error> {
        self.failure.take()
    }

    fn line(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text) {
            self.failure = Some(e);
        }
    }
}

impl Table for ConsoleTable<'_> {
    fn hit_decision(&mut self, view: &HandView) -> bool {
        if self.input_closed || self.failure.is_some() {
            return false;
        }
        let question = format!("{}, do you want a hit? (Y/N): ", view.name);
        match prompt(self.out, self.stdin, &question) {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => {
                tracing::debug!(name = %view.name, "input closed at hit prompt");
                self.input_closed = true;
                false
            }
            Err(e) => {
                self.failure = Some(e);
                false
            }
        }
    }

    fn notify(&mut self, event: TableEvent) {
        match event {
            TableEvent::Hand(view) => self.line(&format_hand(&view)),
            TableEvent::HouseReveal => self.line(""),
            TableEvent::Bust { name } => self.line(&format!("{} busts.", name)),
            TableEvent::Outcome { name, outcome } => self.line(&format_outcome(&name, outcome)),
            TableEvent::OutOfCards => self.line("Out of cards. Unable to deal."),
            TableEvent::NoCardToFlip { .. } => self.line("No card to flip!"),
        }
    }
}
