//! Document scanning: heading tracking and review item emission

use super::parser::{ParsedTag, TagParser};
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Regex for ATX headings: one to six `#` characters, whitespace, title text
fn heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap())
}

/// A validated review tag occurrence with its document context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// Document the tag was found in
    pub source_file: PathBuf,

    /// The matched tag text, as written
    pub tag: String,

    /// Due date encoded in the tag
    pub date: NaiveDate,

    /// Enclosing heading titles at the tag's line, outermost first
    pub title_path: Vec<String>,

    /// 1-based line index within the document
    pub line_number: usize,
}

/// Tracks the stack of enclosing heading titles while walking a document
#[derive(Debug, Default)]
struct HeadingStack {
    titles: Vec<String>,
}

impl HeadingStack {
    /// Enter a heading, discarding deeper titles that are now stale.
    ///
    /// A level-2 heading replaces any previous level-2-and-deeper entries
    /// while preserving the level-1 entry above it.
    fn enter(&mut self, level: usize, title: &str) {
        self.titles.truncate(level - 1);
        self.titles.push(title.to_string());
    }

    fn snapshot(&self) -> Vec<String> {
        self.titles.clone()
    }
}

/// Walks a document line by line and emits a review item for every valid tag
#[derive(Debug, Clone, Default)]
pub struct DocumentScanner {
    parser: TagParser,
}

impl DocumentScanner {
    pub fn new(parser: TagParser) -> Self {
        DocumentScanner { parser }
    }

    pub fn with_prefix(prefix: &str) -> Self {
        DocumentScanner::new(TagParser::new(prefix))
    }

    /// Scan one document's full text.
    ///
    /// Heading state is local to this call, so scanning one document never
    /// leaks into the next. Items are emitted in strict line order, and each
    /// item carries its own copy of the title path at the moment of emission.
    pub fn scan(&self, source_file: &Path, text: &str) -> Vec<ReviewItem> {
        let mut items = Vec::new();
        let mut headings = HeadingStack::default();

        for (index, line) in text.lines().enumerate() {
            // Heading update happens before extraction, so a tag sitting on
            // a heading line sees that heading in its own title path.
            if let Some(captures) = heading_regex().captures(line) {
                let level = captures[1].len();
                let title = captures[2].trim();
                headings.enter(level, title);
            }

            for parsed in self.parser.extract(line) {
                if let ParsedTag::Valid { tag, date } = parsed {
                    items.push(ReviewItem {
                        source_file: source_file.to_path_buf(),
                        tag,
                        date,
                        title_path: headings.snapshot(),
                        line_number: index + 1,
                    });
                }
            }
        }

        items
    }
}
