//! Review tag system

pub mod parser;
pub mod scanner;

// Re-export main types
pub use parser::{ParsedTag, TagParser, DEFAULT_TAG_PREFIX};
pub use scanner::{DocumentScanner, ReviewItem};
