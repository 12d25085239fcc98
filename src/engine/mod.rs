//! Rule-based diagnostic engine.
//!
//! `evaluate` inspects a snippet for a fixed set of known-good and known-bad
//! patterns per language and synthesizes a plausible compiler or interpreter
//! message without executing anything. It is a pure function: no I/O, no
//! state, deterministic for a given `(source, language)` pair, and total —
//! every input maps to a [`DiagnosticResult`].
//!
//! This is not a parser. Checks are substring and regex matches over a
//! comment-stripped view of the source, which is exactly as naive as it
//! sounds and exactly as naive as intended.

mod extract;
mod languages;

use crate::core::types::{DiagnosticResult, Language};

/// Markers whose lines are dropped from the active-code view.
const LINE_COMMENT_MARKERS: [&str; 2] = ["//", "#"];

/// Evaluate `source` as `language`, producing simulated program output or a
/// simulated diagnostic.
pub fn evaluate(source: &str, language: Language) -> DiagnosticResult {
    if source.trim().is_empty() {
        return DiagnosticResult::error("Error: Code is empty.");
    }
    let active = active_code(source);
    languages::apply_rules(source, &active, language)
}

/// Tag-level entry point for callers holding a raw language string.
///
/// The empty-source check runs first, mirroring [`evaluate`]; an unknown tag
/// then reports `Language <tag> not supported.`
pub fn evaluate_tag(source: &str, tag: &str) -> DiagnosticResult {
    if source.trim().is_empty() {
        return DiagnosticResult::error("Error: Code is empty.");
    }
    match tag.parse::<Language>() {
        Ok(language) => evaluate(source, language),
        Err(err) => DiagnosticResult::error(err.to_string()),
    }
}

/// Drop every full line whose trimmed text starts with a line-comment marker.
///
/// This deliberately understands only `//` and `#` whole-line comments: block
/// comments, trailing comments and strings containing `//` are all left
/// alone. The limited semantics are defined here, once, rather than in each
/// language arm.
fn active_code(source: &str) -> String {
    source
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !LINE_COMMENT_MARKERS
                .iter()
                .any(|marker| trimmed.starts_with(marker))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
