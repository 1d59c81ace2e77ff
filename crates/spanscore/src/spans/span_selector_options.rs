use std::sync::Arc;

use crate::spans::{BestSpanSelector, SpanSelector};
use crate::types::LogProbType;

/// Options for configuring a [`SpanSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanSelectorOptions {
    /// Treat each passage's last position as the no-answer channel.
    pub no_answer: bool,

    /// Request a batch-parallel selector.
    pub parallel: bool,
}

impl SpanSelectorOptions {
    /// Gets the configured no-answer mode.
    pub fn no_answer(&self) -> bool {
        self.no_answer
    }

    /// Sets the configured no-answer mode.
    ///
    /// When enabled, the last position of every passage scores the
    /// "no answer" prediction and never joins a real span.
    pub fn set_no_answer(
        &mut self,
        no_answer: bool,
    ) {
        self.no_answer = no_answer;
    }

    /// Sets the configured no-answer mode.
    ///
    /// See: [`set_no_answer`](Self::set_no_answer)
    pub fn with_no_answer(
        mut self,
        no_answer: bool,
    ) -> Self {
        self.set_no_answer(no_answer);
        self
    }

    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a ``rayon`` batch selector;
    /// without the "rayon" feature this is ignored.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// See: [`set_parallel`](Self::set_parallel)
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`SpanSelector`] for these options.
    pub fn build<F: LogProbType>(&self) -> Arc<dyn SpanSelector<F>> {
        let selector = BestSpanSelector::new(self.no_answer);

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                if self.parallel {
                    return Arc::new(crate::rayon::ParallelRayonSpanSelector::new(selector));
                }
            } else {
                if self.parallel {
                    log::debug!("parallel span selection requested without the \"rayon\" feature");
                }
            }
        }

        Arc::new(selector)
    }
}
