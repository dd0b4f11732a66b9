//! Lexing
//!
//! A `.prac` document is processed one physical line at a time. Lexing
//! splits each line into its content and trailing note, then classifies the
//! content. It never fails: deciding whether a classified line is legal in
//! its position is the parser's job.

pub mod comments;
pub mod line_classification;

pub use comments::split_comment;
pub use line_classification::{classify_line, LineType, SourceLine};
