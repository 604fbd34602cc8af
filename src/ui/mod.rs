//! Terminal output for the CLI.

pub mod json;
pub mod output;
