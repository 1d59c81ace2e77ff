//! # Common Types and Traits
use core::fmt::{Debug, Display};

use num_traits::Float;

/// A type that can hold a log-probability.
///
/// These are constrained to be primitive floats (`f32`, `f64`);
/// values are compared and summed, never renormalized.
pub trait LogProbType: 'static + Float + Default + Debug + Display + Send + Sync {}

impl<F> LogProbType for F where F: 'static + Float + Default + Debug + Display + Send + Sync {}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type SSHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SSHashMap<K, V> {
            SSHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type SSHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SSHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type SSHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SSHashMap<K, V> {
            SSHashMap::with_capacity(capacity)
        }
    }
}

/// Static check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Static check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_log_prob_types() {
        struct IsLogProb<F: LogProbType>(PhantomData<F>);

        let _: IsLogProb<f32>;
        let _: IsLogProb<f64>;
    }

    #[test]
    fn test_hash_map_with_capacity() {
        let mut counts: SSHashMap<&str, usize> = hash_map_with_capacity(4);
        *counts.entry("the").or_default() += 1;
        *counts.entry("the").or_default() += 1;
        assert_eq!(counts.get("the"), Some(&2));
    }
}
