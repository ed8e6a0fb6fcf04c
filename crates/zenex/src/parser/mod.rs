//! Abbreviation parsing.
//!
//! Turns the raw abbreviation text into the pieces the expanders work on:
//!
//! - [`segments`]: splitting on the `>` nesting operator and extracting
//!   `*n` repetition counts
//! - [`sigils`]: stripping `.class`, `#id`, and `[key=value]` sigils from
//!   a base token
//!
//! Parsing never fails: text that does not form a valid operator or sigil
//! stays literal, so every abbreviation resolves to *something* downstream.

pub mod segments;
pub mod sigils;

pub use segments::{Segment, tokenize};
pub use sigils::ParsedToken;
