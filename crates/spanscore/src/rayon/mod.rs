//! # Rayon Utilities
//!
//! ``rayon`` powered wrappers for parallel span selection.

mod rayon_selector;

pub use rayon_selector::ParallelRayonSpanSelector;
