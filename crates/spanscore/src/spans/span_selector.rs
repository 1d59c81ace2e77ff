//! # Span Selector

use crate::errors::{SSResult, SpanScoreError};
use crate::spans::{Span, best_span};
use crate::types::LogProbType;

/// Borrowed start/end log-probabilities for one passage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassageLogProbs<'a, F: LogProbType> {
    /// Per-token span start log-probabilities.
    pub start_logp: &'a [F],

    /// Per-token span end log-probabilities.
    pub end_logp: &'a [F],
}

impl<'a, F: LogProbType> PassageLogProbs<'a, F> {
    /// Pair up a passage's start and end log-probabilities.
    pub fn new(
        start_logp: &'a [F],
        end_logp: &'a [F],
    ) -> Self {
        Self {
            start_logp,
            end_logp,
        }
    }
}

/// Split row-major padded `rows x width` matrices into per-passage rows.
///
/// ## Arguments
/// * `start_logp` - flat start log-probabilities, `rows * width` long.
/// * `end_logp` - flat end log-probabilities, same shape.
/// * `width` - the padded passage length.
pub fn padded_rows<'a, F: LogProbType>(
    start_logp: &'a [F],
    end_logp: &'a [F],
    width: usize,
) -> SSResult<Vec<PassageLogProbs<'a, F>>> {
    if start_logp.len() != end_logp.len() {
        return Err(SpanScoreError::LengthMismatch {
            start: start_logp.len(),
            end: end_logp.len(),
        });
    }
    if width == 0 || !start_logp.len().is_multiple_of(width) {
        return Err(SpanScoreError::BatchShape {
            len: start_logp.len(),
            width,
        });
    }

    Ok(start_logp
        .chunks_exact(width)
        .zip(end_logp.chunks_exact(width))
        .map(|(start, end)| PassageLogProbs::new(start, end))
        .collect())
}

/// Selects the best answer span for passages.
pub trait SpanSelector<F: LogProbType>: Send + Sync {
    /// Is the trailing no-answer channel enabled?
    fn allow_no_answer(&self) -> bool;

    /// Select the best span for one passage.
    ///
    /// ## Arguments
    /// * `start_logp` - per-token span start log-probabilities.
    /// * `end_logp` - per-token span end log-probabilities.
    fn best_span(
        &self,
        start_logp: &[F],
        end_logp: &[F],
    ) -> SSResult<Span> {
        best_span(start_logp, end_logp, self.allow_no_answer())
    }

    /// Select the best span for each passage of a ragged batch.
    ///
    /// Fails on the first malformed passage.
    fn select_batch(
        &self,
        batch: &[PassageLogProbs<F>],
    ) -> SSResult<Vec<Span>> {
        batch
            .iter()
            .map(|passage| self.best_span(passage.start_logp, passage.end_logp))
            .collect()
    }

    /// Select the best span for each row of padded `rows x width` matrices.
    ///
    /// Padded positions need very low log-probabilities; no mask is applied.
    /// With the no-answer channel enabled it occupies the last column.
    fn select_padded(
        &self,
        start_logp: &[F],
        end_logp: &[F],
        width: usize,
    ) -> SSResult<Vec<Span>> {
        let rows = padded_rows(start_logp, end_logp, width)?;
        self.select_batch(&rows)
    }
}

/// Serial forward-pass [`SpanSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestSpanSelector {
    allow_no_answer: bool,
}

impl BestSpanSelector {
    /// Create a new selector.
    ///
    /// ## Arguments
    /// * `allow_no_answer` - treat each passage's last position as the no-answer channel.
    pub fn new(allow_no_answer: bool) -> Self {
        Self { allow_no_answer }
    }
}

impl<F: LogProbType> SpanSelector<F> for BestSpanSelector {
    fn allow_no_answer(&self) -> bool {
        self.allow_no_answer
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn select_batch(
        &self,
        batch: &[PassageLogProbs<F>],
    ) -> SSResult<Vec<Span>> {
        log::trace!(
            "selecting spans for {} passages (no_answer={})",
            batch.len(),
            self.allow_no_answer
        );
        batch
            .iter()
            .map(|passage| best_span(passage.start_logp, passage.end_logp, self.allow_no_answer))
            .collect()
    }
}
