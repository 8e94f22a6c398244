use crate::error::{AutomatorError, Result};
use crate::exec::CommandSink;

/// Sink that records every dispatched command instead of running it
#[derive(Debug, Default)]
pub struct RecordingSink {
    dispatched: Vec<String>,
    fail_on: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to dispatch any command containing `needle`
    pub fn failing_on(needle: impl Into<String>) -> Self {
        RecordingSink {
            dispatched: Vec::new(),
            fail_on: Some(needle.into()),
        }
    }

    /// Commands dispatched so far, in order.
    pub fn dispatched(&self) -> &[String] {
        &self.dispatched
    }
}

impl CommandSink for RecordingSink {
    fn dispatch(&mut self, command: &str) -> Result<()> {
        if let Some(needle) = &self.fail_on {
            if command.contains(needle.as_str()) {
                return Err(AutomatorError::exec(format!("refused `{}`", command)));
            }
        }
        self.dispatched.push(command.to_string());
        Ok(())
    }
}
