//! Extractor tests: content token scans, ordering, and the registry.

use std::path::Path;
use std::sync::Arc;

use sift_analysis::extractor::{extract, ContentTokenExtractor, Extractor, ExtractorRegistry};

// ---- Content token extractor ----

#[test]
fn empty_input_yields_nothing() {
    assert!(extract("").is_empty());
}

#[test]
fn input_without_dots_or_delimiters_yields_nothing() {
    assert!(extract("plainword").is_empty());
    assert!(extract("   ").is_empty());
    assert!(extract("<>\"'`").is_empty());
}

#[test]
fn bare_extension() {
    assert_eq!(extract(".html"), vec!["html"]);
}

#[test]
fn lone_dot_is_excluded() {
    assert!(extract(".").is_empty());
    assert!(extract("..").is_empty());
}

#[test]
fn dotted_path_splits_on_dots() {
    assert_eq!(extract("a.b.c"), vec!["b", "c"]);
}

#[test]
fn html_attribute_class_is_found() {
    let tokens = extract(r#"<div class="btn-primary">"#);
    assert!(tokens.contains(&"btn-primary".to_string()));
    for token in &tokens {
        assert!(!token.contains('<'));
        assert!(!token.contains('>'));
        assert!(!token.contains('"'));
    }
    assert_eq!(tokens, vec!["div", "class=", "btn-primary"]);
}

#[test]
fn extension_tokens_precede_class_tokens() {
    // The class token appears first in the text but is emitted after the extension token.
    let tokens = extract(r#"'flex' file.clj"#);
    assert_eq!(tokens, vec!["clj", "flex", "file.clj"]);
}

#[test]
fn extension_run_extends_to_next_dot() {
    // `[^.]` also matches whitespace and newlines.
    assert_eq!(extract("x.html y\nz"), vec!["html y\nz", "y", "z"]);
}

#[test]
fn trailing_colon_is_trimmed_from_class_tokens() {
    assert_eq!(extract(" hover:"), vec!["hover"]);
    assert_eq!(extract(" hover:bg-red"), vec!["hover:bg-red"]);
    assert!(extract(" :").is_empty());
}

#[test]
fn duplicates_are_kept() {
    assert_eq!(extract(" flex flex"), vec!["flex", "flex"]);
}

#[test]
fn hiccup_keywords() {
    let tokens = extract(r#"[:div.flex.items-center {:class "p-4 text-primary"}]"#);
    assert_eq!(
        tokens,
        vec![
            "flex",
            r#"items-center {:class "p-4 text-primary"}]"#,
            "{:class",
            "p-4",
            "text-primary",
            "}]",
        ]
    );
}

#[test]
fn multibyte_whitespace_delimiter_is_stripped() {
    assert_eq!(extract("\u{3000}shadow"), vec!["shadow"]);
}

#[test]
fn backtick_template_literal() {
    assert_eq!(extract("`rounded-lg`"), vec!["rounded-lg"]);
}

#[test]
fn extraction_is_deterministic() {
    let input = r#"<a class="link .active">x.y</a>"#;
    assert_eq!(extract(input), extract(input));
}

// ---- Extractor trait ----

#[test]
fn content_token_extractor_delegates() {
    let ex = ContentTokenExtractor::new();
    assert_eq!(ex.id(), ContentTokenExtractor::ID);
    assert_eq!(ex.extract(".html"), extract(".html"));
}

// ---- Registry ----

struct WordExtractor;

impl Extractor for WordExtractor {
    fn id(&self) -> &str {
        "words"
    }

    fn extract(&self, content: &str) -> Vec<String> {
        content.split_whitespace().map(str::to_string).collect()
    }
}

#[test]
fn registry_defaults_to_content_tokens() {
    let registry = ExtractorRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(
        registry.for_path(Path::new("src/app/core.clj")).id(),
        ContentTokenExtractor::ID
    );
}

#[test]
fn registry_routes_by_extension_case_insensitively() {
    let mut registry = ExtractorRegistry::new();
    registry.register(&["md", ".TXT"], Arc::new(WordExtractor));
    assert_eq!(registry.len(), 2);

    assert_eq!(registry.for_path(Path::new("README.MD")).id(), "words");
    assert_eq!(registry.for_path(Path::new("notes.txt")).id(), "words");
    assert_eq!(
        registry.for_path(Path::new("index.html")).id(),
        ContentTokenExtractor::ID
    );
    assert_eq!(
        registry.for_path(Path::new("Makefile")).id(),
        ContentTokenExtractor::ID
    );

    assert_eq!(
        registry.extract_file(Path::new("a.md"), "one two"),
        vec!["one", "two"]
    );
}

#[test]
fn registry_custom_default() {
    let registry = ExtractorRegistry::with_default(Arc::new(WordExtractor));
    assert_eq!(registry.for_path(Path::new("x.html")).id(), "words");
    assert!(format!("{registry:?}").contains("words"));
}
