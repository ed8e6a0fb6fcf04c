//! Integration tests for markup expansion.
//!
//! Covers the two resolution paths:
//! - Literal table hits (tags, variants, structures) returned normalized
//! - Compositional parsing: nesting, repetition, sigils, generic fallback

use zenex::expand::markup::expand;

// ============================================================================
// LITERAL TABLE HITS
// ============================================================================

#[test]
fn literal_tag() {
    assert_eq!(expand("p"), "<p>${1:}</p>");
}

#[test]
fn literal_tag_with_defaults() {
    assert_eq!(expand("title"), "<title>${1:Document}</title>");
}

#[test]
fn literal_lookup_is_case_insensitive() {
    assert_eq!(expand("DIV"), "<div>${1:}</div>");
    assert_eq!(expand("Meta:VP"), expand("meta:vp"));
}

#[test]
fn self_closing_tag_gains_a_stop() {
    assert_eq!(expand("hr"), "<hr/>${1:}");
    assert_eq!(expand("br"), "<br/>${1:}");
}

#[test]
fn markerless_variant_gains_a_stop() {
    assert_eq!(
        expand("meta:vp"),
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>${1:}"
    );
}

#[test]
fn tag_variant_beats_compositional_parsing() {
    // `a:mail` must hit the tag table, not expand as a generic `<a:mail>`.
    assert_eq!(expand("a:mail"), "<a href=\"mailto:${1:}\">${2:}</a>");
}

#[test]
fn input_variant() {
    assert_eq!(
        expand("input:email"),
        "<input type=\"email\" name=\"${1:}\" id=\"${2:}\"/>"
    );
}

#[test]
fn button_variant() {
    assert_eq!(expand("btn:s"), "<button type=\"submit\">${1:}</button>");
}

#[test]
fn bootstrap_structure() {
    let expected = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>${1:Document}</title>
</head>
<body>
    ${2:}
</body>
</html>"#;
    assert_eq!(expand("!"), expected);
    assert_eq!(expand("html:5"), expected);
}

// ============================================================================
// NESTING AND REPETITION
// ============================================================================

#[test]
fn repetition_renumbers_copies() {
    assert_eq!(
        expand("li*3"),
        "<li>${1:}</li>\n<li>${2:}</li>\n<li>${3:}</li>"
    );
}

#[test]
fn nesting_indents_deeper_segments() {
    assert_eq!(
        expand("ul>li*2"),
        "<ul>${1:}</ul>\n\t<li>${2:}</li>\n\t<li>${3:}</li>"
    );
}

#[test]
fn nesting_grows_one_level_per_segment() {
    assert_eq!(
        expand("div>ul>li"),
        "<div>${1:}</div>\n\t<ul>${2:}</ul>\n\t\t<li>${3:}</li>"
    );
}

#[test]
fn nesting_tolerates_whitespace() {
    assert_eq!(expand("ul > li"), "<ul>${1:}</ul>\n\t<li>${2:}</li>");
}

#[test]
fn repeated_multi_stop_templates_stay_sequential() {
    assert_eq!(
        expand("a*2"),
        "<a href=\"${1:}\">${2:}</a>\n<a href=\"${3:}\">${4:}</a>"
    );
}

#[test]
fn repeated_markerless_templates_stay_steppable() {
    assert_eq!(expand("div>hr*2"), "<div>${1:}</div>\n\t<hr/>${2:}\n\t<hr/>${3:}");
}

#[test]
fn zero_multiplier_is_literal_text() {
    assert_eq!(expand("li*0"), "<li*0>${1:}</li*0>");
}

#[test]
fn non_numeric_multiplier_is_literal_text() {
    assert_eq!(expand("li*x"), "<li*x>${1:}</li*x>");
}

#[test]
fn variants_resolve_per_segment() {
    assert_eq!(
        expand("form>input:email"),
        "<form action=\"${1:}\" method=\"${2:post}\">${3:}</form>\n\t<input type=\"email\" name=\"${4:}\" id=\"${5:}\"/>"
    );
}

// ============================================================================
// SIGILS AND ATTRIBUTES
// ============================================================================

#[test]
fn class_id_and_attribute_sigils() {
    assert_eq!(
        expand("div.card#main[data-x=1]"),
        "<div class=\"card\" id=\"main\" data-x=\"1\">${1:}</div>"
    );
}

#[test]
fn attributes_splice_before_template_attributes() {
    assert_eq!(
        expand("a.external"),
        "<a class=\"external\" href=\"${1:}\">${2:}</a>"
    );
}

#[test]
fn boolean_attribute() {
    assert_eq!(
        expand("input[required]"),
        "<input required type=\"${1:text}\" name=\"${2:}\" id=\"${3:}\"/>"
    );
}

#[test]
fn last_id_wins() {
    assert_eq!(expand("div#a#b"), "<div id=\"b\">${1:}</div>");
}

#[test]
fn sigils_only_defaults_to_div() {
    assert_eq!(expand(".card"), "<div class=\"card\">${1:}</div>");
}

#[test]
fn sigil_text_keeps_its_case() {
    assert_eq!(
        expand("DIV.Card#Main"),
        "<div class=\"Card\" id=\"Main\">${1:}</div>"
    );
}

#[test]
fn repeated_segment_keeps_attributes() {
    assert_eq!(
        expand("li.item*2"),
        "<li class=\"item\">${1:}</li>\n<li class=\"item\">${2:}</li>"
    );
}

// ============================================================================
// GENERIC ELEMENT FALLBACK
// ============================================================================

#[test]
fn unknown_tag_synthesizes_generic_element() {
    assert_eq!(expand("widget"), "<widget>${1:}</widget>");
}

#[test]
fn generic_element_keeps_typed_case() {
    assert_eq!(expand("MyWidget"), "<MyWidget>${1:}</MyWidget>");
}

#[test]
fn generic_element_carries_sigils() {
    assert_eq!(
        expand("widget.small[data-id=7]"),
        "<widget class=\"small\" data-id=\"7\">${1:}</widget>"
    );
}

#[test]
fn generic_elements_nest_and_repeat() {
    assert_eq!(
        expand("panel>slot2*2"),
        "<panel>${1:}</panel>\n\t<slot2>${2:}</slot2>\n\t<slot2>${3:}</slot2>"
    );
}
