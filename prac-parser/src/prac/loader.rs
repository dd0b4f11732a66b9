//! Loading `.prac` documents from disk
//!
//! The whole file is read up front; parsing itself never touches I/O.

use crate::prac::error::{ParseError, ParseResult};
use crate::prac::parsing::{parse_document, ParsedPractice};
use std::fs;
use std::io;
use std::path::Path;

/// Read a file into memory, distinguishing a missing file from other I/O
/// failures.
pub fn read_source(path: impl AsRef<Path>) -> ParseResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ParseError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read and parse a `.prac` file.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<ParsedPractice> {
    let path = path.as_ref();
    let source = read_source(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "loaded practice file");
    parse_document(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prac::error::ErrorKind;

    #[test]
    fn missing_file_is_not_found() {
        let err = parse_file("definitely/not/here.prac").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("definitely/not/here.prac"));
    }

    #[test]
    fn directory_is_an_io_failure() {
        let err = parse_file(env!("CARGO_MANIFEST_DIR")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn parses_a_sample_from_disk() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/basic.prac");
        let parsed = parse_file(path).unwrap();
        assert!(!parsed.sets.is_empty());
    }
}
