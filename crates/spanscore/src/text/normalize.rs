//! # Answer Normalization

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{SquadTextScorer, TextScorer};

static ARTICLES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(a|an|the)\b").unwrap());

/// Normalize an answer string for comparison.
///
/// Lowercases; drops ASCII punctuation; replaces the articles
/// "a", "an" and "the" with spaces; then collapses whitespace runs
/// to single spaces and trims.
pub fn normalize_answer(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let without_articles = ARTICLES_RE.replace_all(&lowered, " ");

    without_articles
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an answer into normalized tokens, as [`SquadTextScorer`] does.
///
/// Empty or all-punctuation text has no tokens.
pub fn answer_tokens(text: &str) -> Vec<String> {
    SquadTextScorer.answer_tokens(text)
}
