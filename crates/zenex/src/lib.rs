//! # Zenex - Abbreviation Expansion Engine
//!
//! Expands selector-style shorthand abbreviations into markup, style-sheet
//! declarations, or script snippets, with embedded tab stops for interactive
//! cursor placement. This crate provides:
//!
//! - **Expansion**: A single [`expand`] entry point dispatching on a
//!   language tag, plus typed dispatch through [`Language`]
//! - **Parsing**: Tokenization of nesting (`>`), repetition (`*n`), and
//!   class/id/attribute sigils (`.name`, `#name`, `[key=value]`)
//! - **Tables**: Static snippet vocabularies for markup tags, style
//!   properties, and script snippets
//!
//! ## Quick Start
//!
//! ```rust
//! use zenex::expand;
//!
//! assert_eq!(expand("w100", "css"), "width: 100px;");
//! assert_eq!(expand("li*2", "html"), "<li>${1:}</li>\n<li>${2:}</li>");
//! assert_eq!(expand("cl", "javascript"), "console.log(${1:});");
//! ```
//!
//! ## Supported Syntax
//!
//! ### Markup abbreviations
//! - Tag lookups: `div`, `a:mail`, `input:email`, `btn:s`
//! - Document structures: `!`, `html:5`, `doc`
//! - Nesting: `ul>li`
//! - Repetition: `li*3`
//! - Sigils: `.class`, `#id`, `[attr]`, `[attr=value]`
//! - Unknown tags synthesize a generic open/close pair
//!
//! ### Style abbreviations
//! - Property shortcuts: `m`, `pos:a`, `d:f`
//! - Value shorthands: `w100` (pixels), `w50p` (percent), `c#fff` (color),
//!   `m-10` (negative)
//! - Unknown properties echo as an editable declaration
//!
//! ### Script abbreviations
//! - Snippet shortcuts: `cl`, `if`, `fe`, `ael`
//! - Numeric suffixes seed the first parameter: `cl2`
//! - Unknown abbreviations become a bare call skeleton
//!
//! Expansion is total: any input string for any recognized language
//! produces some output. Output strings carry tab stops in the canonical
//! `${index:default}` form; the embedding editor steps through and fills
//! them (index 1 first).
//!
//! ## Modules
//!
//! - [`expand`]: Language dispatch and the three expanders
//! - [`parser`]: Abbreviation tokenization and sigil parsing
//! - [`tables`]: Static snippet tables
//! - [`tabstop`]: Tab-stop normalization and renumbering
//! - [`error`]: Error types for language-tag resolution

pub mod error;
pub mod expand;
pub mod parser;
pub mod tables;
pub mod tabstop;

pub use error::UnknownLanguageError;
pub use expand::{Language, expand};
