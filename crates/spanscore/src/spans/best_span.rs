//! # Best Span Dynamic Program
//!
//! Selects the `(start, end)` pair, `start <= end`, maximizing
//! `start_logp[start] + end_logp[end]` over a passage.
//!
//! With the no-answer channel enabled, the passage carries one extra
//! trailing position whose start/end log-probabilities score the
//! "no answer" prediction. Real spans never include that position.

use crate::errors::{SSResult, SpanScoreError};
use crate::spans::Span;
use crate::types::LogProbType;

/// Validate a passage's log-probability sequences.
///
/// ## Returns
/// The passage length `T`.
pub fn check_passage<F: LogProbType>(
    start_logp: &[F],
    end_logp: &[F],
) -> SSResult<usize> {
    if start_logp.len() != end_logp.len() {
        return Err(SpanScoreError::LengthMismatch {
            start: start_logp.len(),
            end: end_logp.len(),
        });
    }
    if start_logp.is_empty() {
        return Err(SpanScoreError::EmptyPassage);
    }
    Ok(start_logp.len())
}

/// Select the best span with a single forward pass.
///
/// Ties resolve to the lexicographically smallest `(start, end)`;
/// the result always equals [`exhaustive_best_span`].
///
/// ## Arguments
/// * `start_logp` - per-token span start log-probabilities.
/// * `end_logp` - per-token span end log-probabilities.
/// * `allow_no_answer` - treat the last position as the no-answer channel.
///
/// ## Returns
/// The best [`Span`]; [`Span::NoAnswer`] only when the no-answer score is
/// strictly greater than every real span.
pub fn best_span<F: LogProbType>(
    start_logp: &[F],
    end_logp: &[F],
    allow_no_answer: bool,
) -> SSResult<Span> {
    select_with(start_logp, end_logp, allow_no_answer, forward_best_span)
}

/// Select the best span by scoring every `(start, end)` pair.
///
/// This is the O(T²) reference form of [`best_span`].
pub fn exhaustive_best_span<F: LogProbType>(
    start_logp: &[F],
    end_logp: &[F],
    allow_no_answer: bool,
) -> SSResult<Span> {
    select_with(start_logp, end_logp, allow_no_answer, all_pairs_best_span)
}

fn select_with<F: LogProbType>(
    start_logp: &[F],
    end_logp: &[F],
    allow_no_answer: bool,
    search: fn(&[F], &[F]) -> (Span, F),
) -> SSResult<Span> {
    let len = check_passage(start_logp, end_logp)?;

    if !allow_no_answer {
        return Ok(search(start_logp, end_logp).0);
    }

    let answer_len = len - 1;
    if answer_len == 0 {
        return Ok(Span::NoAnswer);
    }

    let (span, score) = search(&start_logp[..answer_len], &end_logp[..answer_len]);
    let no_answer_score = start_logp[answer_len] + end_logp[answer_len];
    if no_answer_score > score {
        Ok(Span::NoAnswer)
    } else {
        Ok(span)
    }
}

/// Forward pass; `start_logp` and `end_logp` are non-empty and of equal length.
fn forward_best_span<F: LogProbType>(
    start_logp: &[F],
    end_logp: &[F],
) -> (Span, F) {
    let mut best_start = 0;
    let mut best_start_logp = start_logp[0];

    let mut best = Span::new(0, 0);
    let mut best_score = start_logp[0] + end_logp[0];

    for (j, (&start, &end)) in start_logp.iter().zip(end_logp).enumerate().skip(1) {
        // Only starts at or before `j` are eligible as its partner.
        if start > best_start_logp {
            best_start = j;
            best_start_logp = start;
        }

        let score = best_start_logp + end;
        if score > best_score {
            best_score = score;
            best = Span::new(best_start, j);
        }
    }

    (best, best_score)
}

/// All-pairs search; `start_logp` and `end_logp` are non-empty and of equal length.
fn all_pairs_best_span<F: LogProbType>(
    start_logp: &[F],
    end_logp: &[F],
) -> (Span, F) {
    let mut best = Span::new(0, 0);
    let mut best_score = start_logp[0] + end_logp[0];

    for (i, &start) in start_logp.iter().enumerate() {
        for (j, &end) in end_logp.iter().enumerate().skip(i) {
            let score = start + end;
            if score > best_score {
                best_score = score;
                best = Span::new(i, j);
            }
        }
    }

    (best, best_score)
}
