//! Errors and warnings produced while reading a `.prac` document
//!
//! Content errors are fatal: the parse stops at the first offending line and
//! no partial model is returned. Each one carries the 1-based line number and
//! the raw text of that line. Warnings never stop a parse.

use crate::prac::model::GroupLabel;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The item field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Reps,
    Distance,
    Description,
    Interval,
    Repeat,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Reps => "repetitions",
            Field::Distance => "distance",
            Field::Description => "description",
            Field::Interval => "interval",
            Field::Repeat => "repeat",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    IoFailure,
    InvalidConfigValue,
    StructuralError,
    GrammarError,
    FieldValidationError,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("practice file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("error reading practice file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {message}:\n{text}")]
    InvalidConfigValue {
        line: usize,
        key: String,
        message: String,
        text: String,
    },

    #[error("line {line}: item found outside of any set:\n{text}")]
    Structural { line: usize, text: String },

    #[error("line {line}: {message}:\n{text}")]
    Grammar {
        line: usize,
        group: Option<GroupLabel>,
        message: String,
        text: String,
    },

    #[error("line {line}: {message}:\n{text}")]
    FieldValidation {
        line: usize,
        group: Option<GroupLabel>,
        field: Field,
        message: String,
        text: String,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NotFound { .. } => ErrorKind::NotFound,
            ParseError::Io { .. } => ErrorKind::IoFailure,
            ParseError::InvalidConfigValue { .. } => ErrorKind::InvalidConfigValue,
            ParseError::Structural { .. } => ErrorKind::StructuralError,
            ParseError::Grammar { .. } => ErrorKind::GrammarError,
            ParseError::FieldValidation { .. } => ErrorKind::FieldValidationError,
        }
    }

    /// The 1-based source line, for content errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::NotFound { .. } | ParseError::Io { .. } => None,
            ParseError::InvalidConfigValue { line, .. }
            | ParseError::Structural { line, .. }
            | ParseError::Grammar { line, .. }
            | ParseError::FieldValidation { line, .. } => Some(*line),
        }
    }

    /// The group a grammar or field error was raised for, if it was a
    /// bracketed variation.
    pub fn group(&self) -> Option<GroupLabel> {
        match self {
            ParseError::Grammar { group, .. } | ParseError::FieldValidation { group, .. } => *group,
            _ => None,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recoverable problems found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WarningKind {
    UnknownMetadataKey { key: String },
    UnrecognizedLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub line: usize,
    pub kind: WarningKind,
    pub text: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnknownMetadataKey { key } => {
                write!(f, "line {}: unknown metadata field '{}'", self.line, key)
            }
            WarningKind::UnrecognizedLine => write!(
                f,
                "line {} ignored (not indented, not a header): {}",
                self.line, self.text
            ),
        }
    }
}

/// Format source code context around an error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// `line` is 1-based, as reported by [`ParseError::line`].
pub fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for (line_num, text) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, text));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";

        let context = format_source_context(source, 4);

        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 6"));
        assert!(!context.contains("line 1"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn content_errors_report_line_and_text() {
        let err = ParseError::Structural {
            line: 3,
            text: "  100 swim".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::StructuralError);
        assert_eq!(err.line(), Some(3));
        assert_eq!(
            err.to_string(),
            "line 3: item found outside of any set:\n  100 swim"
        );
    }

    #[test]
    fn io_errors_have_no_line() {
        let err = ParseError::NotFound {
            path: PathBuf::from("missing.prac"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.line(), None);
        assert_eq!(err.to_string(), "practice file 'missing.prac' not found");
    }

    #[test]
    fn warnings_display_their_line() {
        let warning = Warning {
            line: 1,
            kind: WarningKind::UnknownMetadataKey {
                key: "coach".to_string(),
            },
            text: "coach: Sam".to_string(),
        };
        assert_eq!(warning.to_string(), "line 1: unknown metadata field 'coach'");
    }
}
