pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod exec;
pub mod git;
pub mod procedure;
pub mod release;
pub mod ui;

pub use error::{AutomatorError, Result};
