//! Peg configuration: one style paired with one color.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, Style};
use crate::error::Result;

/// A peg configuration.
///
/// Both fields are required and closed over their vocabularies, so any
/// value of this type is a valid pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PegConfig {
    pub style: Style,
    pub color: Color,
}

impl PegConfig {
    /// Create a new peg configuration.
    pub const fn new(style: Style, color: Color) -> Self {
        Self { style, color }
    }

    /// Build a configuration from raw tokens.
    ///
    /// `style` is checked before `color`, so when both are unknown the
    /// error names the `style` field.
    pub fn from_tokens(style: &str, color: &str) -> Result<Self> {
        let style: Style = style.parse()?;
        let color: Color = color.parse()?;
        Ok(Self::new(style, color))
    }

    /// Every style/color pairing, style-major in palette order.
    pub fn all() -> impl Iterator<Item = PegConfig> {
        Style::ALL.into_iter().flat_map(|style| {
            Color::ALL
                .into_iter()
                .map(move |color| PegConfig::new(style, color))
        })
    }
}

impl fmt::Display for PegConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.style)
    }
}
