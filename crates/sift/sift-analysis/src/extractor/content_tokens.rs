//! The default content extractor.
//!
//! Two independent regex scans over the same text:
//!
//! 1. Extension scan: a dot followed by a run of non-dot characters
//!    (`.html`, `.clj`, hiccup-style `:div.btn.active`).
//! 2. Class scan: a delimiter (angle bracket, quote, backtick or whitespace)
//!    followed by a maximal run of non-delimiter characters whose last
//!    character is not a colon.
//!
//! Each match loses its leading character (the dot or the delimiter). All
//! extension-scan tokens come first, then all class-scan tokens. Order and
//! duplicates are kept; callers that need a set deduplicate themselves.

use std::sync::OnceLock;

use regex::Regex;

use super::Extractor;

const EXTENSION_PATTERN: &str = r"\.[^.]+";
const CLASS_PATTERN: &str = r#"[<>"'`\s][^<>"'`\s]*[^<>"'`\s:]"#;

static EXTENSION_RE: OnceLock<Option<Regex>> = OnceLock::new();
static CLASS_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn extension_regex() -> Option<&'static Regex> {
    EXTENSION_RE
        .get_or_init(|| Regex::new(EXTENSION_PATTERN).ok())
        .as_ref()
}

fn class_regex() -> Option<&'static Regex> {
    CLASS_RE.get_or_init(|| Regex::new(CLASS_PATTERN).ok()).as_ref()
}

/// Extract candidate tokens from `content`. Never fails; no matches means an empty vec.
pub fn extract(content: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    if let Some(re) = extension_regex() {
        collect_stripped(re, content, &mut tokens);
    }
    if let Some(re) = class_regex() {
        collect_stripped(re, content, &mut tokens);
    }
    tokens
}

fn collect_stripped(re: &Regex, content: &str, out: &mut Vec<String>) {
    for m in re.find_iter(content) {
        let token = strip_first_char(m.as_str());
        // Both patterns require a character after the leader, so this is never empty.
        if !token.is_empty() {
            out.push(token.to_string());
        }
    }
}

/// Drop one Unicode scalar value. The delimiter may be multi-byte whitespace.
fn strip_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

/// [`Extractor`] wrapper around [`extract`]; the registry default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTokenExtractor;

impl ContentTokenExtractor {
    pub const ID: &'static str = "content-tokens";

    pub fn new() -> Self {
        Self
    }
}

impl Extractor for ContentTokenExtractor {
    fn id(&self) -> &str {
        Self::ID
    }

    fn extract(&self, content: &str) -> Vec<String> {
        extract(content)
    }
}
