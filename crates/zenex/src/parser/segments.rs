//! Nesting and repetition tokenization.

/// One nesting level of a compound abbreviation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment text with any `*<count>` multiplier stripped.
    pub base: &'a str,
    /// How many sibling copies to produce. Always at least 1.
    pub repeat: usize,
}

/// Splits an abbreviation on the `>` nesting operator and extracts each
/// segment's repetition count. An abbreviation without `>` yields a single
/// segment. Surrounding whitespace is trimmed per segment.
pub fn tokenize(abbreviation: &str) -> Vec<Segment<'_>> {
    abbreviation
        .split('>')
        .map(|part| parse_segment(part.trim()))
        .collect()
}

/// Splits a trailing `*<n>` multiplier off a segment. The count must be a
/// positive integer and the base non-empty; `*0` and non-numeric suffixes
/// keep the whole segment as literal text, so `li*0` expands as a literal
/// token instead of producing nothing.
fn parse_segment(base: &str) -> Segment<'_> {
    if let Some(star) = base.rfind('*') {
        let (head, tail) = (&base[..star], &base[star + 1..]);
        if !head.is_empty() && !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(repeat) = tail.parse::<usize>() {
                if repeat >= 1 {
                    return Segment { base: head, repeat };
                }
            }
        }
    }
    Segment { base, repeat: 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(base: &str, repeat: usize) -> Segment<'_> {
        Segment { base, repeat }
    }

    #[test]
    fn single_segment() {
        assert_eq!(tokenize("div"), vec![seg("div", 1)]);
    }

    #[test]
    fn nested_segments() {
        assert_eq!(tokenize("ul>li"), vec![seg("ul", 1), seg("li", 1)]);
    }

    #[test]
    fn multiplier() {
        assert_eq!(tokenize("li*3"), vec![seg("li", 3)]);
    }

    #[test]
    fn nested_with_multiplier() {
        assert_eq!(tokenize("ul>li*3"), vec![seg("ul", 1), seg("li", 3)]);
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(tokenize(" ul > li*2 "), vec![seg("ul", 1), seg("li", 2)]);
    }

    #[test]
    fn zero_multiplier_stays_literal() {
        assert_eq!(tokenize("li*0"), vec![seg("li*0", 1)]);
    }

    #[test]
    fn non_numeric_multiplier_stays_literal() {
        assert_eq!(tokenize("li*abc"), vec![seg("li*abc", 1)]);
    }

    #[test]
    fn bare_star_stays_literal() {
        assert_eq!(tokenize("*3"), vec![seg("*3", 1)]);
        assert_eq!(tokenize("li*"), vec![seg("li*", 1)]);
    }

    #[test]
    fn last_star_wins() {
        assert_eq!(tokenize("a*2*3"), vec![seg("a*2", 3)]);
    }
}
