//! Review tag parsing and calendar validation

use chrono::NaiveDate;
use regex::Regex;

/// Tag prefix used when none is configured
pub const DEFAULT_TAG_PREFIX: &str = "review";

/// Result of validating a single review tag token.
///
/// The original token text is always echoed back; a due date only exists
/// once the token has passed calendar validation, so callers can never read
/// a date off an invalid parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedTag {
    Valid { tag: String, date: NaiveDate },
    Invalid { tag: String },
}

impl ParsedTag {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedTag::Valid { .. })
    }

    /// The original token text, valid or not
    pub fn tag(&self) -> &str {
        match self {
            ParsedTag::Valid { tag, .. } => tag,
            ParsedTag::Invalid { tag } => tag,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ParsedTag::Valid { date, .. } => Some(*date),
            ParsedTag::Invalid { .. } => None,
        }
    }
}

/// Recognizes review tags of the form `#<prefix>/<year>/<month>/<day>`
#[derive(Debug, Clone)]
pub struct TagParser {
    prefix: String,
    pattern: Regex,
}

impl Default for TagParser {
    fn default() -> Self {
        TagParser::new(DEFAULT_TAG_PREFIX)
    }
}

impl TagParser {
    /// Create a parser for the given tag prefix.
    ///
    /// The extraction pattern requires exactly 4 digits for the year and 1-2
    /// digits for month and day; the prefix is escaped so it always matches
    /// literally.
    pub fn new(prefix: &str) -> Self {
        let pattern = Regex::new(&format!(
            r"#{}/\d{{4}}/\d{{1,2}}/\d{{1,2}}",
            regex::escape(prefix)
        ))
        .unwrap();

        TagParser {
            prefix: prefix.to_string(),
            pattern,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse a single tag token.
    ///
    /// Only the first `#` is removed before the prefix check, so the token
    /// is not required to begin with the marker character. The remainder
    /// must be `<prefix>/` followed by exactly three integer fields forming
    /// a real calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use revtag::domain::tags::TagParser;
    ///
    /// let parser = TagParser::new("review");
    /// assert!(parser.parse("#review/2026/1/20").is_valid());
    /// assert!(!parser.parse("#review/2026/2/30").is_valid());
    /// ```
    pub fn parse(&self, tag_text: &str) -> ParsedTag {
        let clean = tag_text.replacen('#', "", 1);

        let Some(date_part) = clean
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return self.invalid(tag_text);
        };

        let fields: Vec<&str> = date_part.split('/').collect();
        let &[year, month, day] = fields.as_slice() else {
            return self.invalid(tag_text);
        };

        let (Ok(year), Ok(month), Ok(day)) = (
            year.parse::<i32>(),
            month.parse::<u32>(),
            day.parse::<u32>(),
        ) else {
            return self.invalid(tag_text);
        };

        // from_ymd_opt rejects out-of-range components (month 13, Feb 30)
        // instead of rolling them into the next month or year.
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => ParsedTag::Valid {
                tag: tag_text.to_string(),
                date,
            },
            None => self.invalid(tag_text),
        }
    }

    /// Whether a token is a valid review tag for this prefix
    pub fn is_review_tag(&self, tag_text: &str) -> bool {
        self.parse(tag_text).is_valid()
    }

    /// Extract every valid review tag from a block of text.
    ///
    /// Matches are returned in order of occurrence, left to right, top to
    /// bottom. Tokens that match the pattern syntactically but encode an
    /// impossible date are dropped.
    pub fn extract(&self, text: &str) -> Vec<ParsedTag> {
        self.pattern
            .find_iter(text)
            .map(|m| self.parse(m.as_str()))
            .filter(|parsed| parsed.is_valid())
            .collect()
    }

    fn invalid(&self, tag_text: &str) -> ParsedTag {
        ParsedTag::Invalid {
            tag: tag_text.to_string(),
        }
    }
}
