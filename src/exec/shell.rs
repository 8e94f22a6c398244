use std::process::Command;

use crate::error::{AutomatorError, Result};
use crate::exec::CommandSink;

/// Runs commands through `bash -c`, inheriting stdio.
///
/// Bash is required rather than `sh` because the sanity diff relies on
/// process substitution.
#[derive(Debug, Clone)]
pub struct ShellSink {
    shell: String,
}

impl ShellSink {
    pub fn new() -> Self {
        ShellSink {
            shell: "bash".to_string(),
        }
    }

    /// Use a different shell binary (must accept `-c <command>`)
    pub fn with_shell(shell: impl Into<String>) -> Self {
        ShellSink {
            shell: shell.into(),
        }
    }
}

impl Default for ShellSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSink for ShellSink {
    fn dispatch(&mut self, command: &str) -> Result<()> {
        tracing::debug!(shell = %self.shell, command, "dispatching");

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|e| {
                AutomatorError::exec(format!("failed to start {} for `{}`: {}", self.shell, command, e))
            })?;

        // The operator sees the command output; the workflow carries on.
        if !status.success() {
            tracing::warn!(
                command,
                code = status.code().unwrap_or(-1),
                "command exited unsuccessfully"
            );
        }

        Ok(())
    }
}

/// Prints nothing and runs nothing; the executor has already shown the command.
#[derive(Debug, Clone, Default)]
pub struct DryRunSink;

impl CommandSink for DryRunSink {
    fn dispatch(&mut self, command: &str) -> Result<()> {
        tracing::debug!(command, "dry run, not executed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_shell_is_a_dispatch_error() {
        let mut sink = ShellSink::with_shell("/nonexistent/shell/for/lae-automator");
        let err = sink.dispatch("true").unwrap_err();
        assert!(err.to_string().contains("Command dispatch failed"));
    }

    #[test]
    fn test_dry_run_never_fails() {
        let mut sink = DryRunSink;
        assert!(sink.dispatch("git push origin LAE_39_STABLE").is_ok());
    }
}
