//! Line-oriented prompting with validation.
//!
//! Invalid input is rejected with a message and the prompt is repeated; only
//! validated values are returned. End of input is reported as `Ok(None)` so
//! callers can end the session cleanly.

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Reads validated values from `input`, echoing prompts and errors to `output`
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over an input and output stream
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output stream, for messages that are not prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line to the output
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}").context("Failed to write to output")
    }

    /// Write text without a newline and flush, so it shows before input is read
    fn show(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")
    }

    /// Read one line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt for an integer in `min..=max`.
    ///
    /// Non-numbers and out-of-range values are rejected and the prompt is
    /// repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn int(&mut self, prompt: &str, min: i64, max: i64) -> Result<Option<i64>> {
        loop {
            self.show(prompt)?;
            let Some(line) = self.read_line()? else { return Ok(None) };

            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                Ok(_) => self.say(format_args!("Value must be between {min} and {max}. Try again."))?,
                Err(_) => self.say("Invalid input! Please enter a number.")?,
            }
        }
    }

    /// Prompt for a non-empty line of text.
    ///
    /// Surrounding whitespace is trimmed; blank lines are rejected and
    /// re-requested.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.show(prompt)?;
        loop {
            let Some(line) = self.read_line()? else { return Ok(None) };
            let value = line.trim();
            if !value.is_empty() {
                return Ok(Some(value.to_owned()));
            }
            self.show("Input cannot be empty! Try again: ")?;
        }
    }
}
