//! Command implementations for the CLI

pub mod completions;
pub mod doctor;
pub mod stop;
pub mod types;
