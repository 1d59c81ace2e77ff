//! # Parallel Span Selector

use crate::errors::SSResult;
use crate::spans::{PassageLogProbs, Span, SpanSelector};
use crate::types::LogProbType;

/// Batch-Level Parallel Span Selector Wrapper.
///
/// Passages are independent; results keep the input order and match
/// the wrapped selector exactly.
#[derive(Clone)]
pub struct ParallelRayonSpanSelector<F: LogProbType, S: SpanSelector<F>> {
    /// Wrapped selector.
    pub inner: S,

    _marker: std::marker::PhantomData<F>,
}

impl<F, S> ParallelRayonSpanSelector<F, S>
where
    F: LogProbType,
    S: SpanSelector<F>,
{
    /// Create a new parallel span selector.
    ///
    /// ## Arguments
    /// * `inner` - The span selector to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonSpanSelector` instance.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<F, S> SpanSelector<F> for ParallelRayonSpanSelector<F, S>
where
    F: LogProbType,
    S: SpanSelector<F>,
{
    fn allow_no_answer(&self) -> bool {
        self.inner.allow_no_answer()
    }

    fn best_span(
        &self,
        start_logp: &[F],
        end_logp: &[F],
    ) -> SSResult<Span> {
        self.inner.best_span(start_logp, end_logp)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    fn select_batch(
        &self,
        batch: &[PassageLogProbs<F>],
    ) -> SSResult<Vec<Span>> {
        use rayon::prelude::*;

        log::trace!("selecting spans for {} passages in parallel", batch.len());

        batch
            .par_iter()
            .map(|passage| self.inner.best_span(passage.start_logp, passage.end_logp))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::spans::BestSpanSelector;
    use crate::types::{check_is_send, check_is_sync};

    fn sample_passage(
        seed: u64,
        len: usize,
    ) -> (Vec<f64>, Vec<f64>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = (0..len).map(|_| rng.random_range(-20.0..0.0)).collect();
        let end = (0..len).map(|_| rng.random_range(-20.0..0.0)).collect();
        (start, end)
    }

    #[test]
    fn test_parallel_matches_serial() {
        for allow_no_answer in [false, true] {
            let serial = BestSpanSelector::new(allow_no_answer);
            let parallel = ParallelRayonSpanSelector::new(serial);
            check_is_send(&parallel);
            check_is_sync(&parallel);
            assert_eq!(
                SpanSelector::<f64>::allow_no_answer(&parallel),
                allow_no_answer
            );

            let passages: Vec<(Vec<f64>, Vec<f64>)> = (0..64)
                .map(|seed| sample_passage(seed, 1 + (seed % 17) as usize))
                .collect();
            let batch: Vec<PassageLogProbs<f64>> = passages
                .iter()
                .map(|(start, end)| PassageLogProbs::new(start, end))
                .collect();

            assert_eq!(
                parallel.select_batch(&batch).unwrap(),
                serial.select_batch(&batch).unwrap()
            );
        }
    }

    #[test]
    fn test_parallel_propagates_errors() {
        let parallel = ParallelRayonSpanSelector::new(BestSpanSelector::new(false));
        let empty: [f32; 0] = [];
        let batch = [PassageLogProbs::new(&empty[..], &empty[..])];
        assert!(parallel.select_batch(&batch).is_err());
    }
}
