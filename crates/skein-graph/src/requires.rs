//! Textual `require(...)` pattern matching.
//!
//! This module is deliberately not a parser. The bundler treats module
//! bodies as opaque text and recognizes exactly one shape: a single-argument
//! `require` call with a single- or double-quoted literal specifier, on one
//! line. Everything else - computed specifiers, multi-line calls,
//! re-assigned `require` identifiers, occurrences inside strings or
//! comments - is outside the pattern and left untouched by rewriting.
//!
//! Keeping the pattern in one place keeps that limitation auditable instead
//! of letting ad-hoc matching grow throughout the codebase.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// A well-formed `require` occurrence: quoted literal, single line.
static REQUIRE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\brequire[ \t]*\([ \t]*(?:'([^']+)'|"([^"]+)")[ \t]*\)"#)
        .expect("require pattern is a valid regex")
});

/// The `module.exports = <expr>;` assignment, non-greedy to the first `;`.
static EXPORTS_ASSIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)module\.exports\s*=\s*(.*?);").expect("exports pattern is a valid regex")
});

/// Collect the dependency specifiers of a module body.
///
/// Specifiers are returned in the order they first occur in source; repeated
/// occurrences of the same specifier are collapsed to the first one. The
/// result is stable across calls for identical input.
pub fn scan_requires(source: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut specifiers = Vec::new();

    for captures in REQUIRE_CALL.captures_iter(source) {
        if let Some(specifier) = literal_group(&captures) {
            if seen.insert(specifier.to_string()) {
                specifiers.push(specifier.to_string());
            }
        }
    }

    specifiers
}

/// Rewrite every well-formed `require` occurrence in `source`.
///
/// `replacement` receives the literal specifier and returns the text to
/// substitute for the whole call, or `None` to leave that occurrence as
/// written. Occurrences not matching the well-formed shape are never offered
/// for replacement.
pub fn rewrite_requires(
    source: &str,
    mut replacement: impl FnMut(&str) -> Option<String>,
) -> String {
    REQUIRE_CALL
        .replace_all(source, |captures: &regex::Captures<'_>| {
            match literal_group(captures).and_then(&mut replacement) {
                Some(text) => text,
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}

/// Extract the expression assigned via `module.exports = <expr>;`.
///
/// Returns the first such assignment's right-hand side, trimmed. The
/// extraction is textual: the expression ends at the first semicolon, so an
/// expression containing `;` inside itself is truncated - a documented
/// limitation of the inlining strategy, matched to its fixture shapes.
/// Returns `None` when the pattern is absent (callers fall back to the raw
/// module text).
pub fn exports_expression(source: &str) -> Option<&str> {
    EXPORTS_ASSIGN
        .captures(source)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
}

fn literal_group<'t>(captures: &regex::Captures<'t>) -> Option<&'t str> {
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}
