//! # ``SQuAD`` Score Accumulator

use crate::metrics::{AnswerMetric, ExampleScore, MetricSnapshot};
use crate::text::{SquadTextScorer, TextScorer};

/// Running sums for one partition of examples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreTotals {
    /// Sum of exact match scores.
    pub em_sum: f64,

    /// Sum of F1 scores.
    pub f1_sum: f64,

    /// Number of examples.
    pub count: usize,
}

impl ScoreTotals {
    /// Fold one example's scores in.
    pub fn add(
        &mut self,
        score: &ExampleScore,
    ) {
        self.em_sum += score.em;
        self.f1_sum += score.f1;
        self.count += 1;
    }

    /// Fold another partition's totals in.
    pub fn merge(
        &mut self,
        other: &ScoreTotals,
    ) {
        self.em_sum += other.em_sum;
        self.f1_sum += other.f1_sum;
        self.count += other.count;
    }

    /// Average exact match; `0.0` when empty.
    pub fn em(&self) -> f64 {
        average(self.em_sum, self.count)
    }

    /// Average F1; `0.0` when empty.
    pub fn f1(&self) -> f64 {
        average(self.f1_sum, self.count)
    }
}

fn average(
    sum: f64,
    count: usize,
) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Exact-match / F1 accumulator with has-answer and no-answer partitions.
///
/// An example is a no-answer example when its gold answers are empty or
/// the first gold answer is `""`; it is then scored against `""` alone,
/// so only an empty (after normalization) prediction is correct.
/// Answerable examples take the best score over all gold answers.
#[derive(Debug, Clone)]
pub struct ScoreAccumulator<S: TextScorer = SquadTextScorer> {
    scorer: S,
    total: ScoreTotals,
    has_answer: ScoreTotals,
    no_answer: ScoreTotals,
}

impl Default for ScoreAccumulator<SquadTextScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreAccumulator<SquadTextScorer> {
    /// Create an accumulator using the standard ``SQuAD`` scorer.
    pub fn new() -> Self {
        Self::with_scorer(SquadTextScorer)
    }
}

impl<S: TextScorer> ScoreAccumulator<S> {
    /// Create an accumulator scoring with `scorer`.
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            total: ScoreTotals::default(),
            has_answer: ScoreTotals::default(),
            no_answer: ScoreTotals::default(),
        }
    }

    /// Totals over all examples.
    pub fn total(&self) -> &ScoreTotals {
        &self.total
    }

    /// Totals over answerable examples.
    pub fn has_answer(&self) -> &ScoreTotals {
        &self.has_answer
    }

    /// Totals over no-answer examples.
    pub fn no_answer(&self) -> &ScoreTotals {
        &self.no_answer
    }

    /// Score one example without recording it.
    pub fn score_example<G: AsRef<str>>(
        &self,
        predicted: &str,
        gold_answers: &[G],
    ) -> ExampleScore {
        let no_answer = gold_answers
            .first()
            .is_none_or(|gold| gold.as_ref().is_empty());

        if no_answer {
            return ExampleScore {
                em: self.scorer.exact_match("", predicted),
                f1: self.scorer.f1("", predicted),
                no_answer,
            };
        }

        let (em, f1) = gold_answers.iter().fold((0.0f64, 0.0f64), |(em, f1), gold| {
            let gold = gold.as_ref();
            (
                em.max(self.scorer.exact_match(gold, predicted)),
                f1.max(self.scorer.f1(gold, predicted)),
            )
        });

        ExampleScore { em, f1, no_answer }
    }

    /// The current averages, without clearing.
    pub fn current(&self) -> MetricSnapshot {
        MetricSnapshot {
            em: self.total.em(),
            f1: self.total.f1(),
            has_ans_em: self.has_answer.em(),
            has_ans_f1: self.has_answer.f1(),
            no_ans_em: self.no_answer.em(),
            no_ans_f1: self.no_answer.f1(),
            total: self.total.count,
            has_ans_total: self.has_answer.count,
            no_ans_total: self.no_answer.count,
        }
    }

    /// Fold another accumulator's totals into this one.
    ///
    /// Used to combine independent evaluation streams at report time.
    pub fn merge<T: TextScorer>(
        &mut self,
        other: &ScoreAccumulator<T>,
    ) {
        self.total.merge(&other.total);
        self.has_answer.merge(&other.has_answer);
        self.no_answer.merge(&other.no_answer);
    }
}

impl<S: TextScorer> AnswerMetric for ScoreAccumulator<S> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, gold_answers)))]
    fn record<G: AsRef<str>>(
        &mut self,
        predicted: &str,
        gold_answers: &[G],
    ) -> ExampleScore {
        let score = self.score_example(predicted, gold_answers);

        self.total.add(&score);
        if score.no_answer {
            self.no_answer.add(&score);
        } else {
            self.has_answer.add(&score);
        }

        score
    }

    fn snapshot(
        &mut self,
        reset: bool,
    ) -> MetricSnapshot {
        let snapshot = self.current();
        if reset {
            self.reset();
        }
        snapshot
    }

    fn reset(&mut self) {
        log::debug!("resetting score accumulator after {} examples", self.total.count);
        self.total = ScoreTotals::default();
        self.has_answer = ScoreTotals::default();
        self.no_answer = ScoreTotals::default();
    }
}

impl<S, P, G> Extend<(P, Vec<G>)> for ScoreAccumulator<S>
where
    S: TextScorer,
    P: AsRef<str>,
    G: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (P, Vec<G>)>>(
        &mut self,
        examples: I,
    ) {
        for (predicted, gold_answers) in examples {
            self.record(predicted.as_ref(), &gold_answers);
        }
    }
}
