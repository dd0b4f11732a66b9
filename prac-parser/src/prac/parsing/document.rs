//! Document parser
//!
//! A fold over the document's lines. The parser state moves through:
//!
//!   CollectingConfig --header--> OpenSet
//!   CollectingConfig --other--> NoSet --header--> OpenSet
//!
//! `CollectingConfig` is the metadata window. It closes for good on the
//! first non-blank line that is not `key: value`. Item lines belong to the
//! most recently opened set; an item before any header is fatal.

use super::item::{parse_count, parse_item_line};
use super::metadata::{MetadataBlock, MetadataKey};
use super::{LineContext, ParsedPractice};
use crate::prac::error::{Field, ParseResult, Warning, WarningKind};
use crate::prac::lexing::{classify_line, LineType, SourceLine};
use crate::prac::model::PracticeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    CollectingConfig,
    NoSet,
    OpenSet,
}

struct DocumentParser {
    state: ParserState,
    metadata: MetadataBlock,
    sets: Vec<PracticeSet>,
    current: Option<PracticeSet>,
    warnings: Vec<Warning>,
}

impl DocumentParser {
    fn new() -> Self {
        Self {
            state: ParserState::CollectingConfig,
            metadata: MetadataBlock::new(),
            sets: Vec::new(),
            current: None,
            warnings: Vec::new(),
        }
    }

    fn step(mut self, line: SourceLine<'_>) -> ParseResult<Self> {
        let window_open = self.state == ParserState::CollectingConfig;
        match classify_line(&line, window_open) {
            LineType::BlankLine => {}
            LineType::MetadataLine { key, value } => self.record_metadata(&line, &key, &value),
            LineType::HeaderLine { name, repeat } => {
                self.open_set(&line, name, repeat.as_deref())?
            }
            LineType::ItemLine => self.push_item(&line)?,
            LineType::UnrecognizedLine => self.skip_unrecognized(&line),
        }
        Ok(self)
    }

    fn record_metadata(&mut self, line: &SourceLine<'_>, key: &str, value: &str) {
        let Some(metadata_key) = MetadataKey::lookup(key) else {
            tracing::warn!(line = line.number, key, "unknown metadata field");
            self.warnings.push(Warning {
                line: line.number,
                kind: WarningKind::UnknownMetadataKey {
                    key: key.to_lowercase(),
                },
                text: line.raw.to_string(),
            });
            return;
        };
        self.metadata
            .record(metadata_key, line.number, line.raw, value);
    }

    fn open_set(
        &mut self,
        line: &SourceLine<'_>,
        name: String,
        repeat: Option<&str>,
    ) -> ParseResult<()> {
        let ctx = LineContext::new(line.number, line.raw);
        let repeat = match repeat {
            Some(digits) => parse_count(digits, Field::Repeat, None, &ctx)?,
            None => 1,
        };
        if repeat == 0 {
            return Err(ctx.field(None, Field::Repeat, "repeat must be positive (got 0)"));
        }

        tracing::debug!(line = line.number, name = %name, repeat, "opening set");
        if let Some(finished) = self.current.take() {
            self.sets.push(finished);
        }
        self.current = Some(PracticeSet::new(name, repeat));
        self.state = ParserState::OpenSet;
        Ok(())
    }

    fn push_item(&mut self, line: &SourceLine<'_>) -> ParseResult<()> {
        let Some(current) = self.current.as_mut() else {
            return Err(LineContext::new(line.number, line.raw).structural());
        };
        current.items.push(parse_item_line(line)?);
        Ok(())
    }

    fn skip_unrecognized(&mut self, line: &SourceLine<'_>) {
        if self.state == ParserState::CollectingConfig {
            self.state = ParserState::NoSet;
        }
        tracing::warn!(
            line = line.number,
            text = line.raw,
            "line ignored (not indented, not a header)"
        );
        self.warnings.push(Warning {
            line: line.number,
            kind: WarningKind::UnrecognizedLine,
            text: line.raw.to_string(),
        });
    }

    fn finish(mut self) -> ParseResult<ParsedPractice> {
        if let Some(finished) = self.current.take() {
            self.sets.push(finished);
        }
        tracing::debug!(
            sets = self.sets.len(),
            warnings = self.warnings.len(),
            "parsed practice"
        );
        let config = self.metadata.into_config().map_err(|invalid| {
            LineContext::new(invalid.line, &invalid.text)
                .invalid_config(invalid.key.name(), invalid.message)
        })?;
        Ok(ParsedPractice {
            config,
            sets: self.sets,
            warnings: self.warnings,
        })
    }
}

/// Parse a complete `.prac` document.
pub fn parse_document(source: &str) -> ParseResult<ParsedPractice> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let parser = source
        .lines()
        .enumerate()
        .map(|(index, raw)| SourceLine::new(index + 1, raw))
        .try_fold(DocumentParser::new(), DocumentParser::step)?;
    parser.finish()
}
