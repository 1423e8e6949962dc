//! CLI command definitions

use crate::error::{Result, RevtagError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "revtag")]
#[command(about = "Review tag catalog for markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new vault
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Print the full review catalog, earliest due date first
    List,

    /// Print items due on or before a reference date
    Pending {
        /// Reference date (DD-MM-YYYY, default: today)
        #[arg(long)]
        on: Option<String>,
    },

    /// Validate a single tag token
    Check {
        /// Tag token, e.g. '#review/2026/1/20'
        tag: String,
    },
}

/// Parse a DD-MM-YYYY reference date argument
pub fn parse_reference_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d-%m-%Y")
        .map_err(|_| RevtagError::InvalidDate(input.to_string()))
}
