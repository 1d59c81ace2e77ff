#![allow(missing_docs)]

use std::{ops::Range, sync::Arc};

use spanscore::{
    AnswerMetric,
    MetricSnapshot,
    ScoreAccumulator,
    Span,
    SpanSelector,
    SpanSelectorOptions,
    spans::PassageLogProbs,
};

const PASSAGE: &str = "The Normans were the people who in the 10th and 11th centuries \
                       gave their name to Normandy, a region in France.";

fn token_offsets(text: &str) -> Vec<Range<usize>> {
    let mut offsets = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                offsets.push(s..idx);
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        offsets.push(s..text.len());
    }
    offsets
}

/// Log-probabilities peaked at `span`; `None` peaks the trailing no-answer slot.
fn peaked(
    len: usize,
    span: Option<(usize, usize)>,
) -> (Vec<f64>, Vec<f64>) {
    let low = (0.01f64).ln();
    let high = (0.9f64).ln();

    let mut start = vec![low; len];
    let mut end = vec![low; len];
    match span {
        Some((s, e)) => {
            start[s] = high;
            end[e] = high;
        }
        None => {
            start[len - 1] = high;
            end[len - 1] = high;
        }
    }
    (start, end)
}

struct Question {
    gold: Vec<&'static str>,
    peak: Option<(usize, usize)>,
}

#[test]
fn test_squad_v2_evaluation() {
    let offsets = token_offsets(PASSAGE);
    assert_eq!(offsets.len(), 21);

    // Each row gets one extra trailing no-answer position.
    let width = offsets.len() + 1;

    let questions = [
        // "10th and 11th centuries"
        Question {
            gold: vec!["10th and 11th centuries", "in the 10th and 11th centuries"],
            peak: Some((8, 11)),
        },
        // Predicts "Normandy," for "France".
        Question {
            gold: vec!["France"],
            peak: Some((16, 16)),
        },
        Question {
            gold: vec![""],
            peak: None,
        },
        // Predicts an answer for an unanswerable question.
        Question {
            gold: vec![],
            peak: Some((0, 1)),
        },
    ];

    let rows: Vec<(Vec<f64>, Vec<f64>)> = questions.iter().map(|q| peaked(width, q.peak)).collect();
    let batch: Vec<PassageLogProbs<f64>> = rows
        .iter()
        .map(|(start, end)| PassageLogProbs::new(start, end))
        .collect();

    let selector: Arc<dyn SpanSelector<f64>> = SpanSelectorOptions::default()
        .with_no_answer(true)
        .build();
    let spans = selector.select_batch(&batch).unwrap();
    assert_eq!(
        spans,
        vec![
            Span::new(8, 11),
            Span::new(16, 16),
            Span::NoAnswer,
            Span::new(0, 1),
        ]
    );

    let mut acc = ScoreAccumulator::new();
    for (question, span) in questions.iter().zip(&spans) {
        let predicted = span.extract(PASSAGE, &offsets).unwrap();
        acc.record(predicted, &question.gold);
    }

    let snapshot = acc.snapshot(true);
    assert_eq!(snapshot.total, 4);
    assert_eq!(snapshot.has_ans_total, 2);
    assert_eq!(snapshot.no_ans_total, 2);
    assert_eq!(snapshot.em, 0.5);
    assert_eq!(snapshot.has_ans_em, 0.5);
    assert_eq!(snapshot.has_ans_f1, 0.5);
    assert_eq!(snapshot.no_ans_em, 0.5);
    assert_eq!(snapshot.no_ans_f1, 0.5);

    assert_eq!(acc.snapshot(false), MetricSnapshot::default());
}

#[test]
fn test_padded_squad_v1_batch() {
    let pad = f64::NEG_INFINITY;
    let selector: Arc<dyn SpanSelector<f64>> = SpanSelectorOptions::default().build();

    let (mut short_start, mut short_end) = peaked(3, Some((1, 2)));
    short_start.extend([pad, pad]);
    short_end.extend([pad, pad]);
    let (long_start, long_end) = peaked(5, Some((3, 4)));

    let start = [short_start, long_start].concat();
    let end = [short_end, long_end].concat();

    let spans = selector.select_padded(&start, &end, 5).unwrap();
    assert_eq!(spans, vec![Span::new(1, 2), Span::new(3, 4)]);
    assert!(spans.iter().all(|span| !span.is_no_answer()));
}
