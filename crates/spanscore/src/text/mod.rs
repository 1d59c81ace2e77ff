//! # Answer Text Scoring
//!
//! Answer normalization, exact match, and token-overlap F1 as used by
//! the ``SQuAD`` evaluation.

mod normalize;
mod text_scorer;

#[doc(inline)]
pub use normalize::*;
#[doc(inline)]
pub use text_scorer::*;
