//! Static expansion tables.
//!
//! Three independent snippet vocabularies, one per target language, built
//! as compile-time `phf` maps. The tables are process-wide read-only
//! constants: constructed once, never mutated, safe to read from any
//! thread.
//!
//! The source vocabulary carried a number of duplicate keys; these tables
//! keep the first definition of each key. DESIGN.md lists every collision
//! and the value that was dropped.

pub mod markup;
pub mod script;
pub mod style;

pub use markup::{BUTTON_TYPES, INPUT_TYPES, STRUCTURES, TAGS};
pub use script::SNIPPETS;
pub use style::PROPERTIES;
