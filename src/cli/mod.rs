//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_reference_date, Cli, Commands};
pub use output::format_review_items;
