//! Parsing
//!
//! Turns `.prac` text into a [`ParsedPractice`]: the document configuration,
//! its sets in source order, and any warnings raised along the way.
//!
//! The parse is a single pass over the lines. The first content error aborts
//! it; there is no partially built result.

mod context;
pub mod document;
pub mod item;
pub mod metadata;

use crate::prac::error::{ParseResult, Warning};
use crate::prac::model::{PracticeSet, WorkoutConfig};
use crate::prac::summary::WorkoutSummary;
use serde::Serialize;

pub(crate) use context::LineContext;
pub use document::parse_document;
pub use item::parse_item_line;
pub use metadata::MetadataKey;

/// The result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPractice {
    pub config: WorkoutConfig,
    pub sets: Vec<PracticeSet>,
    pub warnings: Vec<Warning>,
}

impl ParsedPractice {
    /// Aggregation view over this workout.
    pub fn summary(&self) -> WorkoutSummary<'_> {
        WorkoutSummary::new(&self.config, &self.sets)
    }

    pub fn into_parts(self) -> (WorkoutConfig, Vec<PracticeSet>) {
        (self.config, self.sets)
    }
}

/// Parse a `.prac` document held in memory.
pub fn parse_str(source: &str) -> ParseResult<ParsedPractice> {
    parse_document(source)
}
