//! Tab-stop normalization for snippet templates.
//!
//! Templates in the snippet tables carry positional markers in three source
//! forms: `$1`, `${1}`, and `${1:default}`. Editors stepping through an
//! expansion expect one canonical shape, so every expansion path ends here:
//! markers are rewritten to `${index:default}`, and a template with no
//! marker at all gains a trailing empty stop (a literal snippet like
//! `<hr/>` must still give the cursor somewhere to land).

use std::fmt::Write;

/// One positional marker found while scanning a template.
struct Marker<'a> {
    index: usize,
    default: &'a str,
}

/// Rewrites bare `$n` and `${n}` markers to `${n:}`, leaving markers that
/// already carry a default untouched. Appends `${1:}` when the template
/// has no marker at all. Idempotent: normalizing normalized output is a
/// no-op.
pub fn normalize(template: &str) -> String {
    let (mut out, count) = rewrite(template, |m| (m.index, m.default.to_string()));
    if count == 0 {
        out.push_str("${1:}");
    }
    out
}

/// Rewrites every marker with a fresh sequential index drawn from `next`,
/// preserving defaults. A template with no marker gains one, so repeated
/// copies of marker-less snippets stay individually steppable.
pub fn renumber(template: &str, next: &mut usize) -> String {
    let (mut out, count) = rewrite(template, |m| {
        let index = *next;
        *next += 1;
        (index, m.default.to_string())
    });
    if count == 0 {
        let index = *next;
        *next += 1;
        let _ = write!(out, "${{{index}:}}");
    }
    out
}

/// Like [`normalize`], but index-1 stops with an empty default receive
/// `default_text` instead. Used to thread a numeric suffix into a reused
/// script snippet (`cl2` expands with `${1:param2}`).
pub fn normalize_with_default(template: &str, default_text: &str) -> String {
    let (mut out, count) = rewrite(template, |m| {
        if m.index == 1 && m.default.is_empty() {
            (1, default_text.to_string())
        } else {
            (m.index, m.default.to_string())
        }
    });
    if count == 0 {
        out.push_str("${1:}");
    }
    out
}

/// Rewrites every marker in `template` through `f`, returning the new
/// string and the number of markers found. Non-marker text is copied
/// through verbatim, including `${` sequences that do not form a marker
/// (the interpolation braces of a script template literal, for instance).
fn rewrite<F>(template: &str, mut f: F) -> (String, usize)
where
    F: FnMut(Marker<'_>) -> (usize, String),
{
    let mut out = String::with_capacity(template.len() + 8);
    let mut count = 0;
    let mut rest = template;

    while let Some(at) = rest.find('$') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match scan_marker(rest) {
            Some((marker, len)) => {
                let (index, default) = f(marker);
                count += 1;
                let _ = write!(out, "${{{index}:{default}}}");
                rest = &rest[len..];
            }
            None => {
                out.push('$');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    (out, count)
}

/// Reads a marker at the start of `input` (which begins with `$`),
/// returning it and its byte length in the source text.
fn scan_marker(input: &str) -> Option<(Marker<'_>, usize)> {
    let rest = &input[1..];
    if let Some(braced) = rest.strip_prefix('{') {
        let digits = leading_digits(braced);
        if digits == 0 {
            return None;
        }
        let index: usize = braced[..digits].parse().ok()?;
        match braced.as_bytes().get(digits) {
            // ${n}
            Some(b'}') => Some((Marker { index, default: "" }, digits + 3)),
            // ${n:default}
            Some(b':') => {
                let default = &braced[digits + 1..];
                let end = default.find('}')?;
                Some((
                    Marker {
                        index,
                        default: &default[..end],
                    },
                    digits + end + 4,
                ))
            }
            _ => None,
        }
    } else {
        // $n
        let digits = leading_digits(rest);
        if digits == 0 {
            return None;
        }
        let index: usize = rest[..digits].parse().ok()?;
        Some((Marker { index, default: "" }, digits + 1))
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_bare_marker() {
        assert_eq!(normalize("<p>$1</p>"), "<p>${1:}</p>");
    }

    #[test]
    fn normalize_braced_marker() {
        assert_eq!(normalize("<p>${1}</p>"), "<p>${1:}</p>");
    }

    #[test]
    fn normalize_keeps_defaults() {
        assert_eq!(normalize("<title>${1:Document}</title>"), "<title>${1:Document}</title>");
    }

    #[test]
    fn normalize_appends_stop_when_missing() {
        assert_eq!(normalize("<hr/>"), "<hr/>${1:}");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("<a href=\"$1\">${2}</a>");
        assert_eq!(normalize(&once), once);
        let appended = normalize("<br/>");
        assert_eq!(normalize(&appended), appended);
    }

    #[test]
    fn normalize_preserves_template_literal_braces() {
        assert_eq!(normalize("`$1${$2}$3`"), "`${1:}${${2:}}${3:}`");
    }

    #[test]
    fn normalize_ignores_non_numeric_dollar() {
        assert_eq!(normalize("$x"), "$x${1:}");
    }

    #[test]
    fn renumber_assigns_sequential_indices() {
        let mut next = 1;
        assert_eq!(renumber("<li>${1}</li>", &mut next), "<li>${1:}</li>");
        assert_eq!(renumber("<li>${1}</li>", &mut next), "<li>${2:}</li>");
        assert_eq!(next, 3);
    }

    #[test]
    fn renumber_spans_multiple_markers() {
        let mut next = 1;
        assert_eq!(
            renumber("<a href=\"${1}\">${2}</a>", &mut next),
            "<a href=\"${1:}\">${2:}</a>"
        );
        assert_eq!(
            renumber("<a href=\"${1}\">${2}</a>", &mut next),
            "<a href=\"${3:}\">${4:}</a>"
        );
    }

    #[test]
    fn renumber_appends_stop_when_missing() {
        let mut next = 5;
        assert_eq!(renumber("<hr/>", &mut next), "<hr/>${5:}");
        assert_eq!(next, 6);
    }

    #[test]
    fn renumber_keeps_defaults() {
        let mut next = 7;
        assert_eq!(renumber("${1:text}", &mut next), "${7:text}");
    }

    #[test]
    fn default_seeding_fills_first_stop() {
        assert_eq!(
            normalize_with_default("console.log($1);", "param2"),
            "console.log(${1:param2});"
        );
    }

    #[test]
    fn default_seeding_respects_existing_defaults() {
        assert_eq!(
            normalize_with_default("${1:kept} $2", "param9"),
            "${1:kept} ${2:}"
        );
    }
}
