//! Helper functions
//!
//! Small, pure functions shared by the front-matter parser and the query
//! layer: date normalization, timestamp parsing and text shaping.

mod date;
mod text;

pub use date::*;
pub use text::*;
