//! Analytics derivation engine for trackdash.
//!
//! Pure functions that turn the raw content, creator and daily records of a
//! campaign snapshot into the numbers the dashboard shows: totals and type
//! mix, running totals, ranked pages, highlights and point-over-point deltas.
//! Inputs are only ever borrowed; every derivation returns new data.

pub mod aggregate;
pub mod classify;
pub mod dashboard;
pub mod delta;
pub mod highlight;
pub mod metric;
pub mod ranking;
pub mod timeseries;

pub use aggregate::{
    aggregate_totals, average_metrics, type_distribution, AverageMetrics, SummaryMetrics,
    TypeShare,
};
pub use classify::{classify, classify_platform, Category, Platform};
pub use dashboard::{
    build_view, ChartSeries, DashboardController, DashboardSettings, DashboardView, PointDetail,
    ViewState,
};
pub use delta::{delta, expand_point_date, upload_counts, PointDelta, UploadCounts};
pub use highlight::{top_n, DEFAULT_HIGHLIGHT_COUNT};
pub use metric::{ActiveMetric, MetricSource};
pub use ranking::{
    filter_by_period, filter_by_tags, paginate, sort_by_criterion, sort_criterion, Page,
    Rankable, RankingPeriod, SortCriterion,
};
pub use timeseries::{accumulate, CumulativeRecord, SeriesPoint};
