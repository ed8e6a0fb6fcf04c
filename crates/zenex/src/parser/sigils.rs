//! Class, id, and attribute sigil parsing.
//!
//! A base token like `div.card#main[data-x=1]` carries selector-style
//! sigils that become HTML attributes. The scanner walks the token and
//! peels sigils wherever they occur; anything that does not form a sigil
//! stays in the tag name, so malformed input (an unterminated `[`, a stray
//! `*`) degrades to a longer tag name instead of failing the expansion.

use std::fmt::Write;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_until, take_while1},
    character::complete::char,
    combinator::map,
    sequence::{delimited, preceded},
};

/// A single selector-style sigil.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Sigil {
    Class(String),
    Id(String),
    /// `[key]` or `[key=value]`; the value is `None` for boolean attributes.
    Attribute(String, Option<String>),
}

/// The outcome of stripping sigils from a base token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedToken {
    /// Residual tag name with every sigil removed. May be empty when the
    /// token consisted of sigils only (`.card`).
    pub tag: String,
    /// Class names in order of appearance, duplicates preserved.
    pub classes: Vec<String>,
    /// The id, if any. When several `#id` sigils appear the last one wins.
    pub id: Option<String>,
    /// Bracketed attributes in order of appearance.
    pub attributes: Vec<(String, Option<String>)>,
}

impl ParsedToken {
    /// Strips all sigils from `base`, accumulating them in order.
    pub fn parse(base: &str) -> Self {
        let mut token = ParsedToken::default();
        let mut rest = base;

        while !rest.is_empty() {
            if rest.starts_with(['.', '#', '[']) {
                if let Ok((remaining, sigil)) = parse_sigil(rest) {
                    match sigil {
                        Sigil::Class(name) => token.classes.push(name),
                        Sigil::Id(name) => token.id = Some(name),
                        Sigil::Attribute(key, value) => token.attributes.push((key, value)),
                    }
                    rest = remaining;
                    continue;
                }
            }
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                token.tag.push(c);
            }
            rest = chars.as_str();
        }
        token
    }

    /// Renders the accumulated sigils as an attribute fragment with a
    /// leading space before each attribute, e.g. ` class="card" id="main"`.
    /// Returns an empty string when the token carried no sigils. Classes
    /// come first as a single space-joined `class`, then the id, then the
    /// bracketed attributes in occurrence order.
    pub fn attribute_fragment(&self) -> String {
        let mut out = String::new();
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.classes.join(" "));
        }
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{id}\"");
        }
        for (key, value) in &self.attributes {
            match value {
                Some(value) => {
                    let _ = write!(out, " {key}=\"{value}\"");
                }
                None => {
                    let _ = write!(out, " {key}");
                }
            }
        }
        out
    }
}

/// Parses a class or id name: letters, digits, hyphens, underscores.
fn parse_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a simple sigil: `.class`, `#id`, or `[attribute]`.
fn parse_sigil(input: &str) -> IResult<&str, Sigil> {
    alt((
        map(preceded(char('.'), parse_name), |s| {
            Sigil::Class(s.to_string())
        }),
        map(preceded(char('#'), parse_name), |s| Sigil::Id(s.to_string())),
        parse_attribute_sigil,
    ))(input)
}

/// Parses `[key]` or `[key=value]`, splitting on the first `=`.
fn parse_attribute_sigil(input: &str) -> IResult<&str, Sigil> {
    let (input, content) = delimited(char('['), take_until("]"), char(']'))(input)?;

    if content.trim().is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeUntil,
        )));
    }

    let sigil = match content.find('=') {
        Some(idx) => Sigil::Attribute(
            content[..idx].trim().to_string(),
            Some(content[idx + 1..].trim().to_string()),
        ),
        None => Sigil::Attribute(content.trim().to_string(), None),
    };
    Ok((input, sigil))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tag() {
        let token = ParsedToken::parse("div");
        assert_eq!(token.tag, "div");
        assert_eq!(token.attribute_fragment(), "");
    }

    #[test]
    fn classes_accumulate_in_order() {
        let token = ParsedToken::parse("div.first.second");
        assert_eq!(token.tag, "div");
        assert_eq!(token.attribute_fragment(), " class=\"first second\"");
    }

    #[test]
    fn sigils_only_leaves_empty_tag() {
        let token = ParsedToken::parse(".card");
        assert_eq!(token.tag, "");
        assert_eq!(token.attribute_fragment(), " class=\"card\"");
    }

    #[test]
    fn id_sigil() {
        let token = ParsedToken::parse("div#main");
        assert_eq!(token.tag, "div");
        assert_eq!(token.attribute_fragment(), " id=\"main\"");
    }

    #[test]
    fn last_id_wins() {
        let token = ParsedToken::parse("div#first#second");
        assert_eq!(token.tag, "div");
        assert_eq!(token.attribute_fragment(), " id=\"second\"");
    }

    #[test]
    fn keyed_attribute() {
        let token = ParsedToken::parse("div[data-x=1]");
        assert_eq!(token.attribute_fragment(), " data-x=\"1\"");
    }

    #[test]
    fn boolean_attribute() {
        let token = ParsedToken::parse("input[required]");
        assert_eq!(token.tag, "input");
        assert_eq!(token.attribute_fragment(), " required");
    }

    #[test]
    fn attributes_keep_occurrence_order() {
        let token = ParsedToken::parse("div[x=1][readonly]");
        assert_eq!(token.attribute_fragment(), " x=\"1\" readonly");
    }

    #[test]
    fn full_fragment_order() {
        let token = ParsedToken::parse("div.card#main[data-x=1]");
        assert_eq!(token.tag, "div");
        assert_eq!(
            token.attribute_fragment(),
            " class=\"card\" id=\"main\" data-x=\"1\""
        );
    }

    #[test]
    fn sigil_case_is_preserved() {
        let token = ParsedToken::parse("div.Card#Main");
        assert_eq!(
            token.attribute_fragment(),
            " class=\"Card\" id=\"Main\""
        );
    }

    #[test]
    fn unterminated_bracket_stays_in_tag() {
        let token = ParsedToken::parse("div[unclosed");
        assert_eq!(token.tag, "div[unclosed");
        assert!(token.attributes.is_empty());
    }

    #[test]
    fn empty_brackets_stay_in_tag() {
        let token = ParsedToken::parse("div[]");
        assert_eq!(token.tag, "div[]");
    }

    #[test]
    fn name_characters() {
        let token = ParsedToken::parse("span.nav-item_2");
        assert_eq!(token.tag, "span");
        assert_eq!(token.attribute_fragment(), " class=\"nav-item_2\"");
    }
}
