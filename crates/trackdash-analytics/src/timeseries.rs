//! Running totals over the daily metric series.

use serde::Serialize;
use trackdash_core::DailyMetricRecord;

use crate::metric::{ActiveMetric, MetricSource};

/// Running sums up to and including `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeRecord {
    pub date: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub engagement: u64,
    pub uploads: u64,
}

impl MetricSource for CumulativeRecord {
    fn metric_value(&self, metric: ActiveMetric) -> u64 {
        match metric {
            ActiveMetric::Views => self.views,
            ActiveMetric::Likes => self.likes,
            ActiveMetric::Comments => self.comments,
            ActiveMetric::Engagement => self.engagement,
        }
    }
}

/// A dated point on a chart series, daily or cumulative.
pub trait SeriesPoint: MetricSource {
    fn date_key(&self) -> &str;
    fn uploads(&self) -> u64;
}

impl SeriesPoint for DailyMetricRecord {
    fn date_key(&self) -> &str {
        &self.date
    }

    fn uploads(&self) -> u64 {
        self.uploads
    }
}

impl SeriesPoint for CumulativeRecord {
    fn date_key(&self) -> &str {
        &self.date
    }

    fn uploads(&self) -> u64 {
        self.uploads
    }
}

/// Convert a daily series into running totals, one output per input day.
///
/// The input must already be in ascending date order; it is not re-sorted or
/// checked, and an out-of-order series simply yields out-of-order totals.
/// Running sums saturate at `u64::MAX`.
#[must_use]
pub fn accumulate(daily: &[DailyMetricRecord]) -> Vec<CumulativeRecord> {
    let mut views = 0_u64;
    let mut likes = 0_u64;
    let mut comments = 0_u64;
    let mut engagement = 0_u64;
    let mut uploads = 0_u64;

    daily
        .iter()
        .map(|day| {
            views = views.saturating_add(day.views);
            likes = likes.saturating_add(day.likes);
            comments = comments.saturating_add(day.comments);
            engagement = engagement.saturating_add(day.engagement);
            uploads = uploads.saturating_add(day.uploads);
            CumulativeRecord {
                date: day.date.clone(),
                views,
                likes,
                comments,
                engagement,
                uploads,
            }
        })
        .collect()
}
