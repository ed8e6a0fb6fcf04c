//! Script snippet expansion.
//!
//! Exact snippet hits come first. A trailing numeric suffix reuses the
//! base snippet with the first tab stop's default seeded to a parameter
//! name (`cl2` -> `console.log(${1:param2});`), which keeps repeated
//! insertions of the same snippet distinguishable. Anything else becomes a
//! bare call skeleton, treating the abbreviation as a function name.

use crate::tables::SNIPPETS;
use crate::tabstop::{normalize, normalize_with_default};

/// Expands a script abbreviation.
pub fn expand(abbreviation: &str) -> String {
    if let Some(template) = SNIPPETS.get(abbreviation).copied() {
        return normalize(template);
    }

    if let Some((base, digits)) = split_numeric_suffix(abbreviation) {
        if let Some(template) = SNIPPETS.get(base).copied() {
            log::trace!("script shorthand `{abbreviation}` reuses `{base}`");
            return normalize_with_default(template, &format!("param{digits}"));
        }
    }

    log::debug!("no snippet for `{abbreviation}`, falling back to a call skeleton");
    format!("{abbreviation}(${{1:}});")
}

/// Splits `cl2` into (`cl`, `2`). The base must be lowercase letters and
/// the suffix non-empty digits; anything else is left to the fallback.
fn split_numeric_suffix(abbreviation: &str) -> Option<(&str, &str)> {
    let letters = abbreviation
        .bytes()
        .take_while(u8::is_ascii_lowercase)
        .count();
    if letters == 0 || letters == abbreviation.len() {
        return None;
    }
    let (base, digits) = abbreviation.split_at(letters);
    digits
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some((base, digits))
}
