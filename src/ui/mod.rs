//! User interface module - confirmation prompts and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - `mock` - Scripted prompt for tests
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use crate::error::{AutomatorError, Result};

pub mod formatter;
pub mod mock;

pub use formatter::{
    display, display_error, display_listing, display_major_header, display_message, format_error,
    format_major_header, format_prompt,
};
pub use mock::ScriptedPrompt;

/// Source of yes/no decisions at confirmation gates.
pub trait Confirm {
    /// Ask `message`; `default` is returned for an empty answer.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Interprets one line of operator input.
///
/// Only the line terminator is stripped. Input is lowercased; a leading `y`
/// means yes, a leading `n` means no and an empty line means `default`.
/// Anything else, whitespace included, is `None` and the question must be
/// asked again.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    let answer = input.trim_end_matches(['\r', '\n']).to_lowercase();

    if answer.is_empty() {
        Some(default)
    } else if answer.starts_with('y') {
        Some(true)
    } else if answer.starts_with('n') {
        Some(false)
    } else {
        None
    }
}

/// Asks `message` on `output` until `input` yields a valid answer.
///
/// # Returns
/// * `Ok(bool)` - The operator's decision
/// * `Err` - If the input stream is closed before a valid answer arrives
pub fn read_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: bool,
) -> Result<bool> {
    loop {
        write!(output, "{}", format_prompt(message, default))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AutomatorError::input(format!(
                "input closed while waiting for an answer to '{}'",
                message
            )));
        }

        if let Some(answer) = parse_answer(&line, default) {
            return Ok(answer);
        }
        tracing::debug!(answer = line.trim_end(), "unrecognised confirmation answer");
    }
}

/// Prompts on the process terminal (stdin / stdout).
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        read_confirmation(&mut input, &mut output, message, default)
    }
}
