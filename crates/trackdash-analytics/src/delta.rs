//! Point-over-previous-point change on a chart series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::metric::ActiveMetric;
use crate::timeseries::SeriesPoint;

/// Change at one chart point relative to the point before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDelta {
    pub current: u64,
    /// Value at the preceding index; `None` at the first point.
    pub previous: Option<u64>,
    /// `None` when there is no previous point or it is zero.
    pub percent_change: Option<f64>,
    /// Only defined alongside `percent_change`.
    pub is_increase: Option<bool>,
}

/// New and cumulative upload counts at one chart point.
///
/// The two lookups are independent; either may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCounts {
    pub new_uploads: Option<u64>,
    pub total_uploads: Option<u64>,
}

/// Change in `metric` at `point_key` versus the record just before it.
///
/// "Before" is by position in `series`, not by calendar arithmetic. Returns
/// `None` when no record has date `point_key`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn delta<S: SeriesPoint>(series: &[S], point_key: &str, metric: ActiveMetric) -> Option<PointDelta> {
    let index = series.iter().position(|p| p.date_key() == point_key)?;
    let current = series[index].metric_value(metric);
    let previous = index
        .checked_sub(1)
        .map(|i| series[i].metric_value(metric));

    let percent_change = previous
        .filter(|&prev| prev != 0)
        .map(|prev| (current as f64 - prev as f64) / prev as f64 * 100.0);

    Some(PointDelta {
        current,
        previous,
        percent_change,
        is_increase: percent_change.map(|pct| pct >= 0.0),
    })
}

/// Look up `point_key` separately in the daily and the cumulative series.
#[must_use]
pub fn upload_counts<D, C>(daily: &[D], cumulative: &[C], point_key: &str) -> UploadCounts
where
    D: SeriesPoint,
    C: SeriesPoint,
{
    UploadCounts {
        new_uploads: daily
            .iter()
            .find(|p| p.date_key() == point_key)
            .map(SeriesPoint::uploads),
        total_uploads: cumulative
            .iter()
            .find(|p| p.date_key() == point_key)
            .map(SeriesPoint::uploads),
    }
}

/// Expand an `M-D` chart key into a full date in `year`.
///
/// `"1-02"` in 2025 becomes 2025-01-02. Returns `None` for anything that is
/// not a real calendar day.
#[must_use]
pub fn expand_point_date(point_key: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = point_key.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}
