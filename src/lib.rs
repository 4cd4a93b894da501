//! pegs - Peg style and color vocabulary
//!
//! The closed sets of peg styles and colors, and the configuration type
//! that pairs them. Consumers that accept untrusted tokens parse them
//! through `FromStr` (or serde) and get a `PegError` for anything outside
//! the vocabulary.

pub mod error;
pub mod types;

pub use error::{Field, PegError, Result};
pub use types::{Color, PegConfig, Style, COLORS, STYLES};
