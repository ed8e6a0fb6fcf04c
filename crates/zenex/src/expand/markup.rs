//! Structural markup expansion.
//!
//! A markup abbreviation resolves in one of two ways. An exact hit in any
//! snippet table (tags, input variants, button variants, document
//! structures) returns that template directly, so literal lookups always
//! take precedence over compositional parsing. Everything else is split on
//! the `>` nesting operator and expanded segment by segment: sigils become
//! attributes, known tags pull their template, unknown tags synthesize a
//! generic open/close pair, and `*n` repetition produces sibling copies.
//!
//! Nesting is expressed textually: each deeper segment is indented one tab
//! further, since no element tree is retained. Tab-stop indices are
//! renumbered globally across segments and copies in reading order, so the
//! cursor steps through every produced element exactly once.

use crate::parser::{ParsedToken, tokenize};
use crate::tables::{BUTTON_TYPES, INPUT_TYPES, STRUCTURES, TAGS};
use crate::tabstop::{normalize, renumber};

/// Tag used when an abbreviation carries only sigils: `.card` expands to a
/// `div`, matching what users of selector shorthand expect.
const DEFAULT_TAG: &str = "div";

const INDENT: &str = "\t";

/// Expands a markup abbreviation.
pub fn expand(abbreviation: &str) -> String {
    if let Some(template) = lookup_literal(abbreviation) {
        return normalize(template);
    }

    let mut next_stop = 1usize;
    let mut lines: Vec<String> = Vec::new();

    for (depth, segment) in tokenize(abbreviation).into_iter().enumerate() {
        let token = ParsedToken::parse(segment.base);
        let attrs = token.attribute_fragment();
        let tag = if token.tag.is_empty() {
            DEFAULT_TAG.to_string()
        } else {
            token.tag
        };

        let element = match lookup_tag(&tag) {
            Some(template) => splice_attributes(template, &attrs),
            None => {
                log::debug!("no snippet for tag `{tag}`, synthesizing a generic element");
                format!("<{tag}{attrs}>$1</{tag}>")
            }
        };

        let indent = INDENT.repeat(depth);
        for _ in 0..segment.repeat {
            lines.push(format!("{indent}{}", renumber(&element, &mut next_stop)));
        }
    }

    lines.join("\n")
}

/// Whole-abbreviation lookup across every markup table, case-insensitive.
fn lookup_literal(abbreviation: &str) -> Option<&'static str> {
    let key = abbreviation.to_ascii_lowercase();
    TAGS.get(key.as_str())
        .or_else(|| INPUT_TYPES.get(key.as_str()))
        .or_else(|| BUTTON_TYPES.get(key.as_str()))
        .or_else(|| STRUCTURES.get(key.as_str()))
        .copied()
}

/// Per-segment tag lookup: tags first, then input and button variants.
fn lookup_tag(tag: &str) -> Option<&'static str> {
    let key = tag.to_ascii_lowercase();
    TAGS.get(key.as_str())
        .or_else(|| INPUT_TYPES.get(key.as_str()))
        .or_else(|| BUTTON_TYPES.get(key.as_str()))
        .copied()
}

/// Inserts an attribute fragment immediately after the tag name of the
/// template's opening tag, before any attributes the template already
/// carries. Templates that do not open with `<name` (doctype lines) are
/// returned unchanged.
fn splice_attributes(template: &str, attrs: &str) -> String {
    if attrs.is_empty() {
        return template.to_string();
    }
    let Some(rest) = template.strip_prefix('<') else {
        return template.to_string();
    };
    let name_len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
    if name_len == 0 {
        return template.to_string();
    }
    format!("<{}{}{}", &rest[..name_len], attrs, &rest[name_len..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splices_before_existing_attributes() {
        assert_eq!(
            splice_attributes("<a href=\"${1}\">${2}</a>", " class=\"x\""),
            "<a class=\"x\" href=\"${1}\">${2}</a>"
        );
    }

    #[test]
    fn splice_without_attributes_is_identity() {
        assert_eq!(splice_attributes("<p>${1}</p>", ""), "<p>${1}</p>");
    }

    #[test]
    fn splice_skips_non_element_templates() {
        assert_eq!(
            splice_attributes("<!DOCTYPE html>", " class=\"x\""),
            "<!DOCTYPE html>"
        );
    }
}
