//! Metadata keys
//!
//! The leading `key: value` block recognizes a fixed set of keys. Each key
//! has its own validator, reached by looking the key up by name; unknown keys are not
//! errors (the document parser warns and moves on).

use crate::prac::model::{Units, WorkoutConfig};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataKey {
    Units,
    Title,
    Author,
    Date,
    Description,
    Level,
}

/// A validated metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Units(Units),
    Text(String),
}

type Validator = fn(&str) -> Result<MetadataValue, String>;

fn validate_units(value: &str) -> Result<MetadataValue, String> {
    value
        .parse::<Units>()
        .map(MetadataValue::Units)
        .map_err(|err| err.to_string())
}

fn validate_text(value: &str) -> Result<MetadataValue, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("value cannot be empty".to_string());
    }
    Ok(MetadataValue::Text(value.to_string()))
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 6] = [
        MetadataKey::Units,
        MetadataKey::Title,
        MetadataKey::Author,
        MetadataKey::Date,
        MetadataKey::Description,
        MetadataKey::Level,
    ];

    /// Look a key up by name, ignoring case.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            MetadataKey::Units => "units",
            MetadataKey::Title => "title",
            MetadataKey::Author => "author",
            MetadataKey::Date => "date",
            MetadataKey::Description => "description",
            MetadataKey::Level => "level",
        }
    }

    fn validator(self) -> Validator {
        match self {
            MetadataKey::Units => validate_units,
            _ => validate_text,
        }
    }

    /// Validate a raw value for this key.
    pub fn validate(self, value: &str) -> Result<MetadataValue, String> {
        (self.validator())(value)
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `key: value` pair as written, with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordedValue {
    line: usize,
    text: String,
    value: String,
}

/// A metadata value that failed its key's validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMetadata {
    pub key: MetadataKey,
    pub line: usize,
    /// The raw source line.
    pub text: String,
    pub message: String,
}

/// Metadata accumulated while the metadata window is open. Later values for
/// the same key replace earlier ones; only the surviving value is validated.
#[derive(Debug, Clone, Default)]
pub struct MetadataBlock {
    values: BTreeMap<MetadataKey, RecordedValue>,
}

impl MetadataBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: MetadataKey, line: usize, text: &str, value: &str) {
        self.values.insert(
            key,
            RecordedValue {
                line,
                text: text.to_string(),
                value: value.to_string(),
            },
        );
    }

    /// Build the configuration. Keys never seen keep their defaults.
    pub fn into_config(self) -> Result<WorkoutConfig, InvalidMetadata> {
        let mut config = WorkoutConfig::default();
        for (key, recorded) in self.values {
            let value = key.validate(&recorded.value).map_err(|message| InvalidMetadata {
                key,
                line: recorded.line,
                text: recorded.text,
                message,
            })?;
            match (key, value) {
                (_, MetadataValue::Units(units)) => config.units = units,
                (MetadataKey::Title, MetadataValue::Text(text)) => config.title = Some(text),
                (MetadataKey::Author, MetadataValue::Text(text)) => config.author = Some(text),
                (MetadataKey::Date, MetadataValue::Text(text)) => config.date = Some(text),
                (MetadataKey::Description, MetadataValue::Text(text)) => {
                    config.description = Some(text)
                }
                (MetadataKey::Level, MetadataValue::Text(text)) => config.level = Some(text),
                (MetadataKey::Units, MetadataValue::Text(_)) => {}
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_keys_case_insensitively() {
        assert_eq!(MetadataKey::lookup("units"), Some(MetadataKey::Units));
        assert_eq!(MetadataKey::lookup("Title"), Some(MetadataKey::Title));
        assert_eq!(MetadataKey::lookup("LEVEL"), Some(MetadataKey::Level));
        assert_eq!(MetadataKey::lookup("course"), None);
    }

    #[test]
    fn names_round_trip() {
        for key in MetadataKey::ALL {
            assert_eq!(MetadataKey::lookup(key.name()), Some(key));
        }
    }

    #[test]
    fn units_are_validated() {
        assert_eq!(
            MetadataKey::Units.validate("y"),
            Ok(MetadataValue::Units(Units::Yards))
        );
        let err = MetadataKey::Units.validate("kilometers").unwrap_err();
        assert!(err.contains("invalid units 'kilometers'"));
    }

    #[test]
    fn last_value_wins() {
        let mut block = MetadataBlock::new();
        block.record(MetadataKey::Title, 1, "title: First", "First");
        block.record(MetadataKey::Title, 2, "title: Second", "Second");
        block.record(MetadataKey::Units, 3, "units: yards", "yards");
        let config = block.into_config().unwrap();
        assert_eq!(config.title.as_deref(), Some("Second"));
        assert_eq!(config.units, Units::Yards);
        assert_eq!(config.author, None);
    }

    #[test]
    fn replaced_invalid_units_are_never_checked() {
        let mut block = MetadataBlock::new();
        block.record(MetadataKey::Units, 1, "units: kilometers", "kilometers");
        block.record(MetadataKey::Units, 2, "units: yards", "yards");
        assert_eq!(block.into_config().unwrap().units, Units::Yards);
    }

    #[test]
    fn surviving_invalid_value_reports_its_line() {
        let mut block = MetadataBlock::new();
        block.record(MetadataKey::Units, 1, "units: yards", "yards");
        block.record(MetadataKey::Units, 4, "units: furlongs", "furlongs");
        let err = block.into_config().unwrap_err();
        assert_eq!(err.key, MetadataKey::Units);
        assert_eq!(err.line, 4);
        assert_eq!(err.text, "units: furlongs");
        assert!(err.message.contains("invalid units 'furlongs'"));
    }

    #[test]
    fn empty_block_builds_defaults() {
        assert_eq!(MetadataBlock::new().into_config(), Ok(WorkoutConfig::default()));
    }
}
