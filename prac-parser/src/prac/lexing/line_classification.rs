//! Line Classification
//!
//! Decides what a single line is, in this order:
//!
//!   1. blank (nothing left once the comment is removed)
//!   2. metadata `key: value`, only while the metadata window is open
//!   3. set header `NAME[ xN]:`
//!   4. item, when the raw line starts with whitespace
//!   5. anything else is unrecognized
use super::comments::split_comment;
use once_cell::sync::Lazy;
use regex::Regex;

static METADATA_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+):\s*(.+?)\s*$").unwrap());
static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)(?:\s+x([0-9]+))?:$").unwrap());

/// One physical line of a document, split into content and note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line as written, without its line terminator.
    pub raw: &'a str,
    /// Comment removed, escapes resolved, surrounding whitespace trimmed.
    pub content: String,
    pub note: Option<String>,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        let (content, note) = split_comment(raw);
        Self {
            number,
            raw,
            content: content.trim().to_string(),
            note,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Item lines are recognized by leading whitespace on the raw line.
    pub fn is_indented(&self) -> bool {
        self.raw.starts_with(|c: char| c == ' ' || c == '\t')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    BlankLine,
    MetadataLine { key: String, value: String },
    HeaderLine { name: String, repeat: Option<String> },
    ItemLine,
    UnrecognizedLine,
}

/// Determine the type of a line.
///
/// `metadata_window_open` is true only while the document is still in its
/// leading metadata block; outside of it `key: value` lines are never
/// metadata.
pub fn classify_line(line: &SourceLine<'_>, metadata_window_open: bool) -> LineType {
    if line.is_blank() {
        return LineType::BlankLine;
    }
    if metadata_window_open {
        if let Some(caps) = METADATA_LINE.captures(&line.content) {
            return LineType::MetadataLine {
                key: caps[1].to_string(),
                value: caps[2].to_string(),
            };
        }
    }
    if let Some(caps) = HEADER_LINE.captures(&line.content) {
        return LineType::HeaderLine {
            name: caps[1].trim().to_string(),
            repeat: caps.get(2).map(|m| m.as_str().to_string()),
        };
    }
    if line.is_indented() {
        return LineType::ItemLine;
    }
    LineType::UnrecognizedLine
}
