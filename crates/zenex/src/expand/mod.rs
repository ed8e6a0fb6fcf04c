//! Language dispatch for abbreviation expansion.
//!
//! The editor integration calls [`expand`] with the abbreviation under the
//! cursor and the active buffer's language tag. Dispatch routes to one of
//! three expanders:
//!
//! - [`markup`]: structural markup (HTML)
//! - [`style`]: style-sheet declarations (CSS)
//! - [`script`]: scripting snippets (JavaScript)
//!
//! Every expander is total. An unrecognized language tag is not an error
//! either: the abbreviation comes back unchanged so callers may probe
//! freely on any buffer.

pub mod markup;
pub mod script;
pub mod style;

use std::str::FromStr;

use crate::error::UnknownLanguageError;

/// Target language of an expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Structural markup (HTML).
    Markup,
    /// Style-sheet declarations (CSS).
    Style,
    /// Scripting snippets (JavaScript).
    Script,
}

impl Language {
    /// Expands `abbreviation` for this language.
    pub fn expand(self, abbreviation: &str) -> String {
        match self {
            Language::Markup => markup::expand(abbreviation),
            Language::Style => style::expand(abbreviation),
            Language::Script => script::expand(abbreviation),
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguageError;

    /// Resolves an editor language tag. Accepts `html`/`markup`,
    /// `css`/`style`, and `javascript`/`js`/`script`, ASCII
    /// case-insensitively.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "html" | "markup" => Ok(Language::Markup),
            "css" | "style" => Ok(Language::Style),
            "javascript" | "js" | "script" => Ok(Language::Script),
            _ => Err(UnknownLanguageError(tag.to_string())),
        }
    }
}

/// Expands an abbreviation for the language identified by `language`.
///
/// This is the engine's single entry point: total over arbitrary input.
/// Unknown abbreviations degrade to a fallback expansion, and an
/// unrecognized language tag returns the abbreviation unchanged.
///
/// # Examples
///
/// ```rust
/// use zenex::expand;
///
/// assert_eq!(expand("c#fff", "css"), "color: #fff;");
/// assert_eq!(expand("div", "not-a-language"), "div");
/// ```
pub fn expand(abbreviation: &str, language: &str) -> String {
    match language.parse::<Language>() {
        Ok(lang) => lang.expand(abbreviation),
        Err(_) => abbreviation.to_string(),
    }
}
