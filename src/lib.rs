//! revtag - Review tag catalog for markdown notes
//!
//! Scans a vault of markdown files for inline review tags such as
//! `#review/2026/1/20`, validates the embedded calendar date, and builds a
//! chronologically ordered catalog of items due for review.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RevtagError;
