//! Peg style vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Field, PegError, Result};

/// The shape category of a peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Style {
    Rect,
    Circle,
    Triangle,
}

/// Canonical style tokens, in palette order.
pub const STYLES: [&str; 3] = {
    let mut tokens = [""; 3];
    let mut i = 0;
    while i < Style::ALL.len() {
        tokens[i] = Style::ALL[i].as_str();
        i += 1;
    }
    tokens
};

impl Style {
    /// Every style, in palette order.
    pub const ALL: [Style; 3] = [Style::Rect, Style::Circle, Style::Triangle];

    /// Get the token for this style.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Rect => "rect",
            Style::Circle => "circle",
            Style::Triangle => "triangle",
        }
    }

    /// Position of this style in [`STYLES`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Style {
    type Err = PegError;

    /// Exact, case-sensitive match against [`STYLES`].
    fn from_str(s: &str) -> Result<Self> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| PegError::invalid(Field::Style, s))
    }
}

impl TryFrom<&str> for Style {
    type Error = PegError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Style {
    type Error = PegError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
