//! Domain logic - pure naming rules independent of git operations

pub mod names;
pub mod version;

pub use names::{derive, DerivedNames, VersionLine};
pub use version::{bump, Version};
