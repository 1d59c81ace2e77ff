//! # Answer Spans

use core::ops::{Range, RangeInclusive};

use crate::errors::{SSResult, SpanScoreError};

/// A selected answer: an inclusive token range, or the no-answer sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// An answer covering the inclusive token range `[start, end]`.
    Answer {
        /// First token of the answer.
        start: usize,

        /// Last token of the answer (inclusive).
        end: usize,
    },

    /// The question is predicted to be unanswerable from the passage.
    NoAnswer,
}

impl Span {
    /// The `(start, end)` pair used to render [`Span::NoAnswer`].
    pub const NO_ANSWER_PAIR: (i64, i64) = (-1, -1);

    /// Build an answer span.
    ///
    /// ## Arguments
    /// * `start` - first token index.
    /// * `end` - last token index, inclusive; must be `>= start`.
    pub fn new(
        start: usize,
        end: usize,
    ) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Span::Answer { start, end }
    }

    /// Is this the no-answer sentinel?
    pub fn is_no_answer(&self) -> bool {
        matches!(self, Span::NoAnswer)
    }

    /// The span as a signed `(start, end)` pair; `(-1, -1)` for no answer.
    pub fn as_pair(&self) -> (i64, i64) {
        match *self {
            Span::Answer { start, end } => (start as i64, end as i64),
            Span::NoAnswer => Self::NO_ANSWER_PAIR,
        }
    }

    /// The inclusive token range, if this is an answer.
    pub fn token_range(&self) -> Option<RangeInclusive<usize>> {
        match *self {
            Span::Answer { start, end } => Some(start..=end),
            Span::NoAnswer => None,
        }
    }

    /// The number of tokens covered; `0` for no answer.
    pub fn token_count(&self) -> usize {
        match *self {
            Span::Answer { start, end } => end - start + 1,
            Span::NoAnswer => 0,
        }
    }

    /// Map the span back to a substring of the passage.
    ///
    /// ## Arguments
    /// * `passage` - the source passage text.
    /// * `offsets` - per-token byte ranges into `passage`.
    ///
    /// ## Returns
    /// The passage text from the start of the first token to the end
    /// of the last token; `""` for [`Span::NoAnswer`].
    pub fn extract<'a>(
        &self,
        passage: &'a str,
        offsets: &[Range<usize>],
    ) -> SSResult<&'a str> {
        let Some(tokens) = self.token_range() else {
            return Ok("");
        };
        let (start, end) = tokens.into_inner();

        let token_offsets = |index: usize| {
            offsets.get(index).ok_or(SpanScoreError::SpanOutOfRange {
                index,
                len: offsets.len(),
            })
        };
        let byte_start = token_offsets(start)?.start;
        let byte_end = token_offsets(end)?.end;

        passage
            .get(byte_start..byte_end)
            .ok_or(SpanScoreError::BadOffsets {
                start: byte_start,
                end: byte_end,
                len: passage.len(),
            })
    }
}

impl From<Span> for (i64, i64) {
    fn from(span: Span) -> Self {
        span.as_pair()
    }
}
