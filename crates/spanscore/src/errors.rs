//! # Error Types

/// Errors from spanscore operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanScoreError {
    /// The start and end log-probability sequences of a passage differ in length.
    #[error("start/end length mismatch: {start} start log-probs vs {end} end log-probs")]
    LengthMismatch {
        /// The number of start log-probabilities.
        start: usize,

        /// The number of end log-probabilities.
        end: usize,
    },

    /// A passage has no token positions.
    #[error("empty passage: span selection needs at least one position")]
    EmptyPassage,

    /// A padded batch buffer does not describe a `rows x width` matrix.
    #[error("padded batch of {len} values does not fit rows of width {width}")]
    BatchShape {
        /// The flat buffer length.
        len: usize,

        /// The declared row width.
        width: usize,
    },

    /// A span refers to a token index outside the offsets table.
    #[error("span token {index} out of range for {len} token offsets")]
    SpanOutOfRange {
        /// The offending token index.
        index: usize,

        /// The number of token offsets.
        len: usize,
    },

    /// Token offsets do not describe a valid slice of the passage.
    #[error("token offsets {start}..{end} are not a valid slice of a {len} byte passage")]
    BadOffsets {
        /// Start byte offset.
        start: usize,

        /// End byte offset.
        end: usize,

        /// Passage byte length.
        len: usize,
    },
}

/// Result type for spanscore operations.
pub type SSResult<T> = core::result::Result<T, SpanScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SpanScoreError::LengthMismatch { start: 3, end: 4 }.to_string(),
            "start/end length mismatch: 3 start log-probs vs 4 end log-probs"
        );
        assert_eq!(
            SpanScoreError::BatchShape { len: 7, width: 3 }.to_string(),
            "padded batch of 7 values does not fit rows of width 3"
        );
    }
}
