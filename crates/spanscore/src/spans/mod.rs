//! # Answer Span Selection
//!
//! Picks the best contiguous answer span, or the no-answer sentinel,
//! from independent per-token start/end log-probabilities.
//!
//! See:
//! * [`best_span`] for the single-passage dynamic program.
//! * [`SpanSelector`] for batched selection.
//! * [`SpanSelectorOptions`] to build a (possibly parallel) selector.

mod best_span;
mod span;
mod span_selector;
mod span_selector_options;

#[doc(inline)]
pub use best_span::*;
#[doc(inline)]
pub use span::*;
#[doc(inline)]
pub use span_selector::*;
#[doc(inline)]
pub use span_selector_options::*;
