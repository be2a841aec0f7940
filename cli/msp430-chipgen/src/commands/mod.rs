//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod import;
pub mod list;
