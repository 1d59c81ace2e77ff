//! # Answer Metric Trait

use crate::metrics::MetricSnapshot;

/// The per-example scores produced by [`AnswerMetric::record`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExampleScore {
    /// Exact match, `0.0` or `1.0`.
    pub em: f64,

    /// Best token-overlap F1 against any gold answer.
    pub f1: f64,

    /// Whether the example had no gold answer.
    pub no_answer: bool,
}

/// An accumulator of answer quality over an evaluation run.
///
/// Implementations hold mutable running state; each accumulator is
/// owned by a single evaluation loop.
pub trait AnswerMetric {
    /// Score one example and fold it into the running totals.
    ///
    /// ## Arguments
    /// * `predicted` - the predicted answer text; `""` predicts "no answer".
    /// * `gold_answers` - the gold answer texts; empty, or a leading `""`,
    ///   marks a question with no answer.
    fn record<G: AsRef<str>>(
        &mut self,
        predicted: &str,
        gold_answers: &[G],
    ) -> ExampleScore;

    /// Report the current averages.
    ///
    /// ## Arguments
    /// * `reset` - clear all totals after reading them.
    fn snapshot(
        &mut self,
        reset: bool,
    ) -> MetricSnapshot;

    /// Clear all totals.
    fn reset(&mut self);
}
