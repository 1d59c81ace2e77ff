//! # Text Scorers

use crate::text::normalize_answer;
use crate::types::hash_map_with_capacity;

/// Scores a predicted answer string against one gold answer string.
pub trait TextScorer {
    /// Normalize an answer for comparison.
    fn normalize(
        &self,
        text: &str,
    ) -> String;

    /// `1.0` if the normalized answers are equal, else `0.0`.
    fn exact_match(
        &self,
        gold: &str,
        predicted: &str,
    ) -> f64 {
        if self.normalize(gold) == self.normalize(predicted) {
            1.0
        } else {
            0.0
        }
    }

    /// Whitespace tokens of the normalized answer.
    fn answer_tokens(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Bag-of-tokens F1 between the normalized answers, in `[0, 1]`.
    fn f1(
        &self,
        gold: &str,
        predicted: &str,
    ) -> f64 {
        token_f1(&self.answer_tokens(gold), &self.answer_tokens(predicted))
    }
}

/// Token-overlap F1 between two token lists.
///
/// If either list is empty, the score is `1.0` when both are empty
/// and `0.0` otherwise. Overlap counts shared tokens with multiplicity.
pub fn token_f1<S: AsRef<str>>(
    gold_tokens: &[S],
    predicted_tokens: &[S],
) -> f64 {
    if gold_tokens.is_empty() || predicted_tokens.is_empty() {
        return if gold_tokens.len() == predicted_tokens.len() {
            1.0
        } else {
            0.0
        };
    }

    let mut gold_counts = hash_map_with_capacity::<&str, usize>(gold_tokens.len());
    for token in gold_tokens {
        *gold_counts.entry(token.as_ref()).or_default() += 1;
    }

    let mut num_same = 0usize;
    for token in predicted_tokens {
        if let Some(count) = gold_counts.get_mut(token.as_ref())
            && *count > 0
        {
            *count -= 1;
            num_same += 1;
        }
    }

    if num_same == 0 {
        return 0.0;
    }

    let precision = num_same as f64 / predicted_tokens.len() as f64;
    let recall = num_same as f64 / gold_tokens.len() as f64;
    2.0 * precision * recall / (precision + recall)
}

/// The standard ``SQuAD`` answer scorer.
///
/// See [`normalize_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SquadTextScorer;

impl TextScorer for SquadTextScorer {
    fn normalize(
        &self,
        text: &str,
    ) -> String {
        normalize_answer(text)
    }
}
