//! Subcommand implementations.

pub mod generate;
pub mod list;
pub mod show;
