use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{COLORS, STYLES};

/// The peg configuration field a token was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Style,
    Color,
}

impl Field {
    /// Get the field name as it appears in a peg configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Style => "style",
            Field::Color => "color",
        }
    }

    /// Get the canonical tokens accepted for this field.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Field::Style => &STYLES,
            Field::Color => &COLORS,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Main error type for peg vocabulary operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PegError {
    #[error("Invalid {field} value: '{value}'")]
    #[diagnostic(code(pegs::invalid_enumeration_value))]
    InvalidEnumerationValue {
        field: Field,
        value: String,
        #[help]
        help: Option<String>,
    },
}

impl PegError {
    /// Build an `InvalidEnumerationValue` error listing the accepted tokens.
    pub fn invalid(field: Field, value: impl Into<String>) -> Self {
        PegError::InvalidEnumerationValue {
            field,
            value: value.into(),
            help: Some(format!("Expected one of: {}", field.tokens().join(", "))),
        }
    }

    /// Get the field that failed.
    pub fn field(&self) -> Field {
        match self {
            PegError::InvalidEnumerationValue { field, .. } => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, PegError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Style.to_string(), "style");
        assert_eq!(Field::Color.to_string(), "color");
    }

    #[test]
    fn test_invalid_message() {
        let err = PegError::invalid(Field::Style, "hexagon");
        assert_eq!(err.to_string(), "Invalid style value: 'hexagon'");
        assert_eq!(err.field(), Field::Style);
    }

    #[test]
    fn test_invalid_help_lists_tokens() {
        let err = PegError::invalid(Field::Style, "square");
        let help = err.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("Expected one of: rect, circle, triangle")
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let err = PegError::invalid(Field::Color, "chartreuse");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("pegs::invalid_enumeration_value"));
    }
}
