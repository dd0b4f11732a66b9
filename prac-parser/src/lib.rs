//! # prac
//!
//! A parser for the prac swim workout format.
//!
//! A `.prac` document is line oriented: an optional block of `key: value`
//! metadata, followed by named sets, each holding indented workout items.
//!
//! ```text
//! title: Tuesday Aerobic
//! units: yards
//!
//! Warmup:
//!   400 swim @ 6:00
//! Main Set x3:
//!   4x100 free @ 1:30 [4x75 free @ 1:30]   # B group swims 75s
//! ```
//!
//! Layout
//!
//! src/prac
//!   ├── intervals   Clock-duration tokens (validation and conversion)
//!   ├── lexing      Comment stripping and line classification
//!   ├── parsing     Item line grammar and the document state machine
//!   ├── model       Config, sets, items and per-group variations
//!   ├── summary     Cross-set aggregation and the text report
//!   ├── error       Fatal errors and recoverable warnings
//!   ├── loader      File entry point
//!   └── testing     Fluent assertions and bundled sample documents
//!
//! For testing guidelines, see the [testing module](prac::testing).

pub mod prac;

pub use prac::error::{ErrorKind, ParseError, ParseResult, Warning, WarningKind};
pub use prac::loader::parse_file;
pub use prac::model::{GroupLabel, GroupVariation, PracticeSet, SetItem, Units, WorkoutConfig};
pub use prac::parsing::{parse_str, ParsedPractice};
pub use prac::summary::{ReportOptions, WorkoutSummary};
