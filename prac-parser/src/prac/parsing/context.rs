use crate::prac::error::{Field, ParseError};
use crate::prac::model::GroupLabel;

/// The line being parsed, used to build errors that point back at it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineContext<'a> {
    pub number: usize,
    pub raw: &'a str,
}

impl<'a> LineContext<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self { number, raw }
    }

    pub fn grammar(&self, group: Option<GroupLabel>, message: impl Into<String>) -> ParseError {
        ParseError::Grammar {
            line: self.number,
            group,
            message: message.into(),
            text: self.raw.to_string(),
        }
    }

    pub fn field(
        &self,
        group: Option<GroupLabel>,
        field: Field,
        message: impl Into<String>,
    ) -> ParseError {
        ParseError::FieldValidation {
            line: self.number,
            group,
            field,
            message: message.into(),
            text: self.raw.to_string(),
        }
    }

    pub fn structural(&self) -> ParseError {
        ParseError::Structural {
            line: self.number,
            text: self.raw.to_string(),
        }
    }

    pub fn invalid_config(&self, key: &str, message: impl Into<String>) -> ParseError {
        ParseError::InvalidConfigValue {
            line: self.number,
            key: key.to_string(),
            message: message.into(),
            text: self.raw.to_string(),
        }
    }
}
