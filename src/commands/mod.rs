//! Command implementations for the embundle CLI

pub mod completions;
pub mod generate;
pub mod version;
