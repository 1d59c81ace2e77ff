//! # Metric Snapshots

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Average scores reported by an [`AnswerMetric`](crate::metrics::AnswerMetric).
///
/// Every average is `sum / count` over its partition, or `0.0` when the
/// partition is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Average exact match over all examples.
    pub em: f64,

    /// Average F1 over all examples.
    pub f1: f64,

    /// Average exact match over answerable examples.
    pub has_ans_em: f64,

    /// Average F1 over answerable examples.
    pub has_ans_f1: f64,

    /// Average exact match over no-answer examples.
    pub no_ans_em: f64,

    /// Average F1 over no-answer examples.
    pub no_ans_f1: f64,

    /// Number of examples.
    pub total: usize,

    /// Number of answerable examples.
    pub has_ans_total: usize,

    /// Number of no-answer examples.
    pub no_ans_total: usize,
}

impl MetricSnapshot {
    /// The metric names, in report order.
    pub const NAMES: [&'static str; 9] = [
        "em",
        "f1",
        "has_ans_em",
        "has_ans_f1",
        "no_ans_em",
        "no_ans_f1",
        "total",
        "has_ans_total",
        "no_ans_total",
    ];

    /// Look up a metric by name; counts are reported as floats.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<f64> {
        Some(match name {
            "em" => self.em,
            "f1" => self.f1,
            "has_ans_em" => self.has_ans_em,
            "has_ans_f1" => self.has_ans_f1,
            "no_ans_em" => self.no_ans_em,
            "no_ans_f1" => self.no_ans_f1,
            "total" => self.total as f64,
            "has_ans_total" => self.has_ans_total as f64,
            "no_ans_total" => self.no_ans_total as f64,
            _ => return None,
        })
    }

    /// The snapshot as a metric-name to value mapping.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        Self::NAMES
            .iter()
            .filter_map(|&name| self.get(name).map(|value| (name.to_string(), value)))
            .collect()
    }
}

impl From<MetricSnapshot> for BTreeMap<String, f64> {
    fn from(snapshot: MetricSnapshot) -> Self {
        snapshot.to_map()
    }
}
