//! Command execution
//!
//! Every external command of a release procedure goes through the
//! [`Executor`], which shows it to the operator (or asks first in
//! confirm-all mode) and hands it to a [`CommandSink`]:
//! - [`ShellSink`]: runs the command with bash
//! - [`DryRunSink`]: runs nothing
//! - [`RecordingSink`]: records commands for tests

pub mod mock;
pub mod shell;

pub use mock::RecordingSink;
pub use shell::{DryRunSink, ShellSink};

use crate::error::Result;
use crate::ui::{self, Confirm};

/// Destination of fully templated shell commands.
///
/// Implementations report only whether the command could be started; the
/// exit status of the command itself is not part of the contract.
pub trait CommandSink {
    fn dispatch(&mut self, command: &str) -> Result<()>;
}

/// What happened to a command handed to the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Ran,
    /// Declined by the operator in confirm-all mode
    Skipped,
}

/// Runs commands, optionally asking before each one.
pub struct Executor<S, P> {
    sink: S,
    prompt: P,
    confirm_all: bool,
}

impl<S: CommandSink, P: Confirm> Executor<S, P> {
    pub fn new(sink: S, prompt: P, confirm_all: bool) -> Self {
        Executor {
            sink,
            prompt,
            confirm_all,
        }
    }

    /// Show and dispatch `command`.
    ///
    /// In confirm-all mode the operator is asked first and a declined
    /// command is skipped.
    ///
    /// # Returns
    /// * `Ok(Dispatch)` - Whether the command was handed to the sink
    /// * `Err` - If the prompt could not be answered or the sink could not start the command
    pub fn run(&mut self, command: &str) -> Result<Dispatch> {
        if self.confirm_all {
            if !self.prompt.confirm(&format!("Run `{}`?", command), true)? {
                ui::display_message("Skipping command");
                return Ok(Dispatch::Skipped);
            }
        } else {
            ui::display_message(command);
        }

        self.sink.dispatch(command)?;
        Ok(Dispatch::Ran)
    }

    /// Ask the operator a question at a confirmation gate.
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.prompt.confirm(message, default)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedPrompt;

    #[test]
    fn test_runs_without_asking_by_default() {
        let mut executor = Executor::new(RecordingSink::new(), ScriptedPrompt::new([]), false);
        assert_eq!(executor.run("git checkout LAE_39_STABLE").unwrap(), Dispatch::Ran);
        assert_eq!(executor.sink().dispatched(), ["git checkout LAE_39_STABLE"]);
        assert!(executor.prompt().asked().is_empty());
    }

    #[test]
    fn test_confirm_all_asks_before_each_command() {
        let mut executor = Executor::new(RecordingSink::new(), ScriptedPrompt::new([true]), true);
        assert_eq!(executor.run("git tag -a x").unwrap(), Dispatch::Ran);
        assert_eq!(executor.prompt().asked(), ["Run `git tag -a x`?"]);
        assert_eq!(executor.sink().dispatched().len(), 1);
    }

    #[test]
    fn test_confirm_all_declined_skips_command() {
        let mut executor = Executor::new(RecordingSink::new(), ScriptedPrompt::always(false), true);
        assert_eq!(executor.run("git push origin x").unwrap(), Dispatch::Skipped);
        assert!(executor.sink().dispatched().is_empty());
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut executor = Executor::new(
            RecordingSink::failing_on("push"),
            ScriptedPrompt::new([]),
            false,
        );
        assert!(executor.run("git push origin x").is_err());
    }
}
