#![allow(missing_docs)]

use std::sync::Arc;

use divan::{Bencher, black_box, counter::ItemsCount};
use rand::{Rng, SeedableRng, rngs::StdRng};
use spanscore::spans::{PassageLogProbs, SpanSelector, SpanSelectorOptions, exhaustive_best_span};

fn main() {
    divan::main();
}

fn passage(
    seed: u64,
    len: usize,
) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = (0..len).map(|_| rng.random_range(-20.0..0.0)).collect();
    let end = (0..len).map(|_| rng.random_range(-20.0..0.0)).collect();
    (start, end)
}

fn batch(
    rows: usize,
    len: usize,
) -> Vec<(Vec<f32>, Vec<f32>)> {
    (0..rows as u64).map(|seed| passage(seed, len)).collect()
}

#[divan::bench(args = [64, 256, 1024])]
fn forward(
    bencher: Bencher,
    len: usize,
) {
    let (start, end) = passage(7, len);
    let selector: Arc<dyn SpanSelector<f32>> = SpanSelectorOptions::default().build();
    bencher
        .counter(ItemsCount::new(len))
        .bench(|| selector.best_span(black_box(&start), black_box(&end)));
}

#[divan::bench(args = [64, 256, 1024])]
fn exhaustive(
    bencher: Bencher,
    len: usize,
) {
    let (start, end) = passage(7, len);
    bencher
        .counter(ItemsCount::new(len))
        .bench(|| exhaustive_best_span(black_box(&start), black_box(&end), false));
}

mod batched {
    use super::*;

    const ROWS: usize = 512;
    const LEN: usize = 384;

    fn run(
        bencher: Bencher,
        parallel: bool,
    ) {
        let passages = batch(ROWS, LEN);
        let rows: Vec<PassageLogProbs<f32>> = passages
            .iter()
            .map(|(start, end)| PassageLogProbs::new(start, end))
            .collect();
        let selector: Arc<dyn SpanSelector<f32>> = SpanSelectorOptions::default()
            .with_no_answer(true)
            .with_parallel(parallel)
            .build();

        bencher
            .counter(ItemsCount::new(ROWS))
            .bench(|| selector.select_batch(black_box(&rows)));
    }

    #[divan::bench]
    fn serial(bencher: Bencher) {
        run(bencher, false);
    }

    #[divan::bench]
    fn parallel(bencher: Bencher) {
        run(bencher, true);
    }
}
