//! Integration tests for the expansion facade: language dispatch,
//! totality, and the placeholder contract.

use zenex::{Language, UnknownLanguageError, expand};

// ============================================================================
// DISPATCH
// ============================================================================

#[test]
fn dispatches_by_tag() {
    assert_eq!(expand("div", "html"), "<div>${1:}</div>");
    assert_eq!(expand("w100", "css"), "width: 100px;");
    assert_eq!(expand("cl", "javascript"), "console.log(${1:});");
}

#[test]
fn accepts_alias_tags() {
    assert_eq!(expand("div", "markup"), expand("div", "html"));
    assert_eq!(expand("w100", "style"), expand("w100", "css"));
    assert_eq!(expand("cl", "js"), expand("cl", "javascript"));
    assert_eq!(expand("cl", "script"), expand("cl", "javascript"));
}

#[test]
fn tag_matching_ignores_case() {
    assert_eq!(expand("div", "HTML"), "<div>${1:}</div>");
    assert_eq!(expand("w100", "CSS"), "width: 100px;");
}

#[test]
fn unknown_tag_passes_through() {
    assert_eq!(expand("div", "python"), "div");
    assert_eq!(expand("anything at all", ""), "anything at all");
}

#[test]
fn typed_dispatch_matches_untyped() {
    assert_eq!(Language::Markup.expand("ul>li"), expand("ul>li", "html"));
    assert_eq!(Language::Style.expand("m-10"), expand("m-10", "css"));
    assert_eq!(Language::Script.expand("cl2"), expand("cl2", "javascript"));
}

#[test]
fn language_from_str_rejects_unknown_tags() {
    let err = "rust".parse::<Language>().unwrap_err();
    assert_eq!(err, UnknownLanguageError("rust".to_string()));
    assert_eq!(err.to_string(), "unknown language tag: rust");
}

// ============================================================================
// TOTALITY
// ============================================================================

#[test]
fn every_input_produces_output() {
    let inputs = [
        "", " ", "*", "*3", "***", ">", ">>>", "a>>b", "div>", ">div", "[", "]", "[]", "#", ".",
        "$", "${", "${1", "a*b*c", "li*99999999999999999999", "🦀", "a.🦀", "div#", "..deep",
    ];
    for language in ["html", "css", "javascript"] {
        for input in inputs {
            let output = expand(input, language);
            assert!(
                !output.is_empty(),
                "empty output for {input:?} in {language}"
            );
        }
    }
}

#[test]
fn empty_markup_abbreviation_defaults_to_div() {
    assert_eq!(expand("", "html"), "<div>${1:}</div>");
}

// ============================================================================
// PLACEHOLDER CONTRACT
// ============================================================================

#[test]
fn template_expansions_carry_a_stop() {
    // Every template-based expansion ends up with at least one tab stop.
    let cases = [
        ("hr", "html"),
        ("!", "html"),
        ("ul>li*3", "html"),
        (".card", "html"),
        ("nonsense", "html"),
        ("pos:a", "css"),
        ("nonsense", "css"),
        ("cge", "javascript"),
        ("nonsense", "javascript"),
    ];
    for (abbreviation, language) in cases {
        let output = expand(abbreviation, language);
        assert!(
            output.contains("${"),
            "no tab stop in {output:?} for {abbreviation:?}"
        );
    }
}

#[test]
fn normalization_is_idempotent_over_expansions() {
    use zenex::tabstop::normalize;
    for (abbreviation, language) in
        [("ul>li*2", "html"), ("mx", "css"), ("for", "javascript"), ("!", "html")]
    {
        let output = expand(abbreviation, language);
        assert_eq!(normalize(&output), output);
    }
}
