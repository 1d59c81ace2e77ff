//! # Answer Metrics
//!
//! Running exact-match / F1 accumulation for ``SQuAD`` v1 and v2 style
//! evaluation, split into has-answer and no-answer partitions.
//!
//! See:
//! * [`AnswerMetric`] for the record / snapshot / reset contract.
//! * [`ScoreAccumulator`] for the standard implementation.
//! * [`MetricSnapshot`] for reported averages.

mod answer_metric;
mod metric_snapshot;
mod score_accumulator;

#[doc(inline)]
pub use answer_metric::*;
#[doc(inline)]
pub use metric_snapshot::*;
#[doc(inline)]
pub use score_accumulator::*;
