//! Top-N records for the active metric.

use crate::metric::{ActiveMetric, MetricSource};

pub const DEFAULT_HIGHLIGHT_COUNT: usize = 10;

/// The `n` records with the highest `metric`, best first.
///
/// Uses the same stable descending order as the ranking pipeline, so ties keep
/// their input order. Returns every record when there are fewer than `n`.
#[must_use]
pub fn top_n<T>(records: &[T], metric: ActiveMetric, n: usize) -> Vec<T>
where
    T: MetricSource + Clone,
{
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|record| std::cmp::Reverse(record.metric_value(metric)));
    ranked.truncate(n);
    ranked
}
