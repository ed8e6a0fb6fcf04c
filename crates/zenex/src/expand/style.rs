//! Style declaration expansion.
//!
//! Resolution order for a style abbreviation:
//!
//! 1. Exact hit in the property table (case-insensitive)
//! 2. The [`MATCHERS`] list, in order: percentage, dimension, color,
//!    negative dimension
//! 3. Literal echo: `"<abbreviation>: ${1:};"` so an unknown property can
//!    be completed by hand
//!
//! Each matcher decomposes the abbreviation into a known property prefix
//! plus a formatted value; a matcher whose prefix is not in the table does
//! not fire, and later matchers still get their chance. The percentage
//! matcher runs before the dimension matcher so `w50p` reads as 50% rather
//! than as the unit letter `p`.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{eof, opt},
    sequence::tuple,
};

use crate::tables::PROPERTIES;
use crate::tabstop::normalize;

/// A shorthand pattern paired with its value formatter. Returns the
/// property prefix (borrowed from the abbreviation) and the substituted
/// value text.
type Matcher = fn(&str) -> Option<(&str, String)>;

/// Ordered shorthand matchers; the first whose pattern and property prefix
/// both resolve wins.
const MATCHERS: [Matcher; 4] = [
    match_percentage,
    match_dimension,
    match_color,
    match_negative,
];

/// Expands a style abbreviation into one or more declarations.
pub fn expand(abbreviation: &str) -> String {
    let key = abbreviation.to_ascii_lowercase();
    if let Some(template) = PROPERTIES.get(key.as_str()) {
        return normalize(template);
    }

    for matcher in MATCHERS {
        if let Some((property, value)) = matcher(abbreviation) {
            if let Some(template) = PROPERTIES.get(property.to_ascii_lowercase().as_str()) {
                log::trace!("style shorthand `{abbreviation}` -> `{property}` = `{value}`");
                return template.replace("$1", &value);
            }
        }
    }

    log::debug!("no property for `{abbreviation}`, echoing as a declaration");
    format!("{abbreviation}: ${{1:}};")
}

/// A property abbreviation: a run of letters.
fn property_prefix(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic())(input)
}

/// Unit letters, `%` included: `em`, `rem`, `vh`, ...
fn unit_suffix(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_lowercase() || c == '%')(input)
}

/// `w50p` -> (`w`, `50%`).
fn match_percentage(abbreviation: &str) -> Option<(&str, String)> {
    let (_, (property, digits, _, _)) =
        tuple((property_prefix, digit1, char('p'), eof))(abbreviation).ok()?;
    Some((property, format!("{digits}%")))
}

/// `w100` -> (`w`, `100px`); `w100em` -> (`w`, `100em`). The unit defaults
/// to pixels when absent.
fn match_dimension(abbreviation: &str) -> Option<(&str, String)> {
    let (_, (property, digits, unit, _)) =
        tuple((property_prefix, digit1, opt(unit_suffix), eof))(abbreviation).ok()?;
    Some((property, format!("{digits}{}", unit.unwrap_or("px"))))
}

/// `c#fff` -> (`c`, `#fff`). Exactly three or six hex digits.
fn match_color(abbreviation: &str) -> Option<(&str, String)> {
    let (_, (property, _, hex, _)) = tuple((
        property_prefix,
        char('#'),
        take_while1(|c: char| c.is_ascii_hexdigit()),
        eof,
    ))(abbreviation)
    .ok()?;
    if hex.len() != 3 && hex.len() != 6 {
        return None;
    }
    Some((property, format!("#{hex}")))
}

/// `m-10` -> (`m`, `-10px`); `m-10em` -> (`m`, `-10em`).
fn match_negative(abbreviation: &str) -> Option<(&str, String)> {
    let (_, (property, _, digits, unit, _)) =
        tuple((property_prefix, char('-'), digit1, opt(unit_suffix), eof))(abbreviation).ok()?;
    Some((property, format!("-{digits}{}", unit.unwrap_or("px"))))
}
