//! # `spanscore` Answer Span Selection and Scoring
//!
//! Reading-comprehension models emit per-token start and end
//! log-probabilities over a passage. `spanscore` turns those into answer
//! spans, and scores the resulting answer strings with the ``SQuAD`` v1/v2
//! exact-match and F1 metrics.
//!
//! See:
//! * [`spans`] to select the best answer span, or "no answer", per passage.
//! * [`metrics`] to accumulate exact-match / F1 over an evaluation run.
//! * [`text`] for the answer normalization and per-answer scores.
//!
//! ## Selecting Spans
//!
//! ```rust
//! use spanscore::spans::{Span, SpanSelector, SpanSelectorOptions};
//!
//! let start_logp: Vec<f64> = [0.4, 0.5, 0.1].iter().map(|p: &f64| p.ln()).collect();
//! let end_logp: Vec<f64> = [0.3, 0.6, 0.1].iter().map(|p: &f64| p.ln()).collect();
//!
//! let selector = SpanSelectorOptions::default().build::<f64>();
//! assert_eq!(selector.best_span(&start_logp, &end_logp)?, Span::new(1, 1));
//! # Ok::<(), spanscore::SpanScoreError>(())
//! ```
//!
//! ## Scoring Answers
//!
//! ```rust
//! use spanscore::metrics::{AnswerMetric, ScoreAccumulator};
//!
//! let mut acc = ScoreAccumulator::new();
//! acc.record("the Normans", &["Normans"]);
//! acc.record("", &[""]);
//!
//! let snapshot = acc.snapshot(true);
//! assert_eq!(snapshot.em, 1.0);
//! assert_eq!(snapshot.has_ans_total, 1);
//! assert_eq!(snapshot.no_ans_total, 1);
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod metrics;
pub mod spans;
pub mod text;
pub mod types;

#[doc(inline)]
pub use errors::{SSResult, SpanScoreError};
#[doc(inline)]
pub use metrics::{AnswerMetric, MetricSnapshot, ScoreAccumulator};
#[doc(inline)]
pub use spans::{Span, SpanSelector, SpanSelectorOptions, best_span};
#[doc(inline)]
pub use text::{SquadTextScorer, TextScorer};
#[doc(inline)]
pub use types::LogProbType;
