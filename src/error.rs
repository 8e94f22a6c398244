use thiserror::Error;

/// Unified error type for lae-automator operations
#[derive(Error, Debug)]
pub enum AutomatorError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot derive version: {0}")]
    Version(String),

    #[error("Command dispatch failed: {0}")]
    Exec(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Procedure '{procedure}' failed for major version {major}")]
    Aborted { procedure: String, major: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in lae-automator
pub type Result<T> = std::result::Result<T, AutomatorError>;

impl AutomatorError {
    /// Create a usage error (missing or unknown command)
    pub fn usage(msg: impl Into<String>) -> Self {
        AutomatorError::Usage(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutomatorError::Config(msg.into())
    }

    /// Create a version derivation error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutomatorError::Version(msg.into())
    }

    pub fn exec(msg: impl Into<String>) -> Self {
        AutomatorError::Exec(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        AutomatorError::Input(msg.into())
    }

    /// True for errors that should be followed by the help text
    pub fn is_usage(&self) -> bool {
        matches!(self, AutomatorError::Usage(_))
    }
}
