//! Peg vocabulary types.
//!
//! - `Style` - peg shape (rect, circle, triangle)
//! - `Color` - one of seventeen named hues
//! - `PegConfig` - a style paired with a color

mod color;
mod peg;
mod style;

pub use color::{Color, COLORS};
pub use peg::PegConfig;
pub use style::{Style, STYLES};
