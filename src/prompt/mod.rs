//! Interactive prompting
//!
//! The recorder only needs two things from the terminal: pick one of N
//! labelled choices, and read one line of text.

mod validate;

pub use validate::parse_minutes;

use std::io::{BufRead, Write};

use crate::error::{Result, StudyLogError};

/// Source of user answers
pub trait Prompter {
    /// Present `choices` and return the zero-based index of the one picked
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize>;

    /// Read one line of free text
    fn input(&mut self, message: &str) -> Result<String>;

    /// Show feedback to the user
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Line-based prompter: numbered menus, answers read one line at a time.
///
/// An empty answer, `q`, or end of input cancels.
pub struct TerminalPrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        writeln!(self.writer, "{}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", i + 1, choice)?;
        }

        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let answer = match self.read_line()? {
                Some(answer) => answer,
                None => return Err(StudyLogError::SelectionCancelled),
            };
            let answer = answer.trim();
            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Err(StudyLogError::SelectionCancelled);
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(
                    self.writer,
                    "Please choose a number between 1 and {}.",
                    choices.len()
                )?,
            }
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;

        self.read_line()?.ok_or(StudyLogError::SelectionCancelled)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}
