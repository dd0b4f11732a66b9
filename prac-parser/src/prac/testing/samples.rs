//! Bundled sample documents
//!
//! The files live in `prac-parser/samples/` and are compiled in, so tests
//! and tools can use them without knowing where the crate is checked out.

use crate::prac::error::ParseResult;
use crate::prac::parsing::{parse_document, ParsedPractice};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Metadata block, three sets, one group.
    Basic,
    /// Yards, groups A to C, variations on most items.
    MultiGroup,
    /// Comments, notes, an escaped `#`, an unknown key and a stray line.
    Annotated,
    /// Item line before any set header.
    OrphanItem,
    /// Item with a zero distance.
    ZeroDistance,
    /// `units: kilometers`.
    BadUnits,
    /// Bracketed variation without a distance.
    MalformedBracket,
}

impl Sample {
    pub const ALL: [Sample; 7] = [
        Sample::Basic,
        Sample::MultiGroup,
        Sample::Annotated,
        Sample::OrphanItem,
        Sample::ZeroDistance,
        Sample::BadUnits,
        Sample::MalformedBracket,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Sample::Basic => "basic.prac",
            Sample::MultiGroup => "multi_group.prac",
            Sample::Annotated => "annotated.prac",
            Sample::OrphanItem => "orphan_item.prac",
            Sample::ZeroDistance => "zero_distance.prac",
            Sample::BadUnits => "bad_units.prac",
            Sample::MalformedBracket => "malformed_bracket.prac",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Sample::Basic => include_str!("../../../samples/basic.prac"),
            Sample::MultiGroup => include_str!("../../../samples/multi_group.prac"),
            Sample::Annotated => include_str!("../../../samples/annotated.prac"),
            Sample::OrphanItem => include_str!("../../../samples/orphan_item.prac"),
            Sample::ZeroDistance => include_str!("../../../samples/zero_distance.prac"),
            Sample::BadUnits => include_str!("../../../samples/bad_units.prac"),
            Sample::MalformedBracket => include_str!("../../../samples/malformed_bracket.prac"),
        }
    }

    /// Location of the sample on disk, for tests that go through the loader.
    pub fn path(self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("samples")
            .join(self.file_name())
    }

    pub fn parse(self) -> ParseResult<ParsedPractice> {
        parse_document(self.source())
    }

    /// Samples that are expected to parse.
    pub fn is_valid(self) -> bool {
        matches!(self, Sample::Basic | Sample::MultiGroup | Sample::Annotated)
    }
}
