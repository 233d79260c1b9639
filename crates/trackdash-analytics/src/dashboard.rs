//! Explicit view controller: re-derives every dashboard panel from the raw
//! snapshot whenever the view state changes.
//!
//! [`build_view`] is the pure derivation. [`DashboardController`] wraps it with
//! a small memo keyed by `(snapshot revision, view state)`; a miss simply
//! recomputes, so results never depend on what is cached.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trackdash_core::{AppConfig, ContentRecord, CreatorRecord, DailyMetricRecord, Snapshot};

use crate::aggregate::{
    aggregate_totals, average_metrics, type_distribution, AverageMetrics, SummaryMetrics,
    TypeShare,
};
use crate::delta::{delta, expand_point_date, upload_counts, PointDelta, UploadCounts};
use crate::highlight::{top_n, DEFAULT_HIGHLIGHT_COUNT};
use crate::metric::ActiveMetric;
use crate::ranking::{filter_by_period, filter_by_tags, paginate, sort_by_criterion, Page, RankingPeriod};
use crate::timeseries::{accumulate, CumulativeRecord};

pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Everything the user can change on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub metric: ActiveMetric,
    pub content_sort: String,
    pub creator_sort: String,
    /// Content-type tags; ordered so equal selections hash equally.
    pub filter_tags: BTreeSet<String>,
    pub content_page: i64,
    pub creator_page: i64,
    pub period: RankingPeriod,
    pub selected_date: Option<String>,
    pub cumulative: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            metric: ActiveMetric::Views,
            content_sort: "views".to_string(),
            creator_sort: "avg-views".to_string(),
            filter_tags: BTreeSet::new(),
            content_page: 1,
            creator_page: 1,
            period: RankingPeriod::All,
            selected_date: None,
            cumulative: false,
        }
    }
}

impl ViewState {
    /// Select `date` on the chart, or clear the selection if it is already selected.
    pub fn toggle_date(&mut self, date: &str) {
        if self.selected_date.as_deref() == Some(date) {
            self.selected_date = None;
        } else {
            self.selected_date = Some(date.to_string());
        }
    }

    /// Add or remove a content-type filter tag.
    ///
    /// Changing the filter sends the content ranking back to its first page.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.filter_tags.remove(tag) {
            self.filter_tags.insert(tag.to_string());
        }
        self.content_page = 1;
    }
}

/// Static knobs for view derivation, usually taken from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub page_size: usize,
    pub highlight_count: usize,
    pub chart_year: i32,
    pub cache_capacity: usize,
    /// Last day of the ranking period window. When unset, the most recent
    /// upload day in the snapshot is used.
    pub today: Option<NaiveDate>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            highlight_count: DEFAULT_HIGHLIGHT_COUNT,
            chart_year: 2025,
            cache_capacity: 32,
            today: None,
        }
    }
}

impl DashboardSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            highlight_count: config.highlight_count,
            chart_year: config.chart_year,
            cache_capacity: config.view_cache_size,
            today: None,
        }
    }
}

/// The series drawn on the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "points", rename_all = "camelCase")]
pub enum ChartSeries {
    Daily(Vec<DailyMetricRecord>),
    Cumulative(Vec<CumulativeRecord>),
}

/// Details for the chart point the user selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDetail {
    pub date: String,
    pub full_date: Option<NaiveDate>,
    /// Change on the series currently charted (daily or cumulative).
    pub delta: Option<PointDelta>,
    pub uploads: UploadCounts,
}

/// Every derived panel of the dashboard for one view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub revision: String,
    pub totals: SummaryMetrics,
    pub averages: Option<AverageMetrics>,
    pub distribution: Vec<TypeShare>,
    pub chart: ChartSeries,
    pub highlights: Vec<ContentRecord>,
    pub contents: Page<ContentRecord>,
    pub creators: Page<CreatorRecord>,
    pub selection: Option<PointDetail>,
}

/// Derive the full dashboard for `view` from the raw `snapshot`.
#[must_use]
pub fn build_view(
    snapshot: &Snapshot,
    settings: &DashboardSettings,
    view: &ViewState,
) -> DashboardView {
    let cumulative = accumulate(&snapshot.daily);

    let today = settings.today.or_else(|| {
        snapshot
            .contents
            .iter()
            .filter_map(ContentRecord::upload_day)
            .max()
    });
    let in_period = match today {
        Some(today) => filter_by_period(&snapshot.contents, view.period, today),
        None if view.period == RankingPeriod::All => snapshot.contents.clone(),
        None => Vec::new(),
    };
    let filtered = filter_by_tags(&in_period, view.filter_tags.iter().map(String::as_str));
    let sorted_contents = sort_by_criterion(&filtered, &view.content_sort);
    let sorted_creators = sort_by_criterion(&snapshot.creators, &view.creator_sort);

    let selection = view.selected_date.as_deref().map(|date| PointDetail {
        date: date.to_string(),
        full_date: expand_point_date(date, settings.chart_year),
        delta: if view.cumulative {
            delta(&cumulative, date, view.metric)
        } else {
            delta(&snapshot.daily, date, view.metric)
        },
        uploads: upload_counts(&snapshot.daily, &cumulative, date),
    });

    let chart = if view.cumulative {
        ChartSeries::Cumulative(cumulative)
    } else {
        ChartSeries::Daily(snapshot.daily.clone())
    };

    DashboardView {
        revision: snapshot.revision.clone(),
        totals: aggregate_totals(&snapshot.contents),
        averages: average_metrics(&snapshot.contents),
        distribution: type_distribution(&snapshot.contents),
        chart,
        highlights: top_n(&snapshot.contents, view.metric, settings.highlight_count),
        contents: paginate(&sorted_contents, settings.page_size, view.content_page),
        creators: paginate(&sorted_creators, settings.page_size, view.creator_page),
        selection,
    }
}

type CacheKey = (String, ViewState);

/// Holds the current snapshot and memoizes rendered views.
pub struct DashboardController {
    snapshot: Arc<Snapshot>,
    settings: DashboardSettings,
    cache: HashMap<CacheKey, Arc<DashboardView>>,
    /// Insertion order for FIFO eviction.
    order: VecDeque<CacheKey>,
}

impl DashboardController {
    #[must_use]
    pub fn new(snapshot: Arc<Snapshot>, settings: DashboardSettings) -> Self {
        Self {
            snapshot,
            settings,
            cache: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Swap in a freshly fetched snapshot. Cached views of the old one are dropped.
    pub fn replace_snapshot(&mut self, snapshot: Arc<Snapshot>) {
        if snapshot.revision != self.snapshot.revision {
            tracing::debug!(
                old = %self.snapshot.revision,
                new = %snapshot.revision,
                "snapshot replaced; clearing view cache"
            );
            self.cache.clear();
            self.order.clear();
        }
        self.snapshot = snapshot;
    }

    /// Render the dashboard for `view`, reusing a memoized result when possible.
    pub fn render(&mut self, view: &ViewState) -> Arc<DashboardView> {
        let key = (self.snapshot.revision.clone(), view.clone());
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(revision = %key.0, "view cache hit");
            return Arc::clone(hit);
        }

        tracing::debug!(revision = %key.0, "view cache miss; deriving");
        let rendered = Arc::new(build_view(&self.snapshot, &self.settings, view));

        if self.settings.cache_capacity > 0 {
            while self.order.len() >= self.settings.cache_capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.cache.remove(&oldest);
                }
            }
            self.order.push_back(key.clone());
            self.cache.insert(key, Arc::clone(&rendered));
        }

        rendered
    }

    #[must_use]
    pub fn cached_views(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
