//! The metric a dashboard view is currently focused on.

use serde::{Deserialize, Serialize};
use trackdash_core::{ContentRecord, DailyMetricRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveMetric {
    #[default]
    Views,
    Likes,
    Comments,
    Engagement,
}

impl ActiveMetric {
    pub const ALL: [ActiveMetric; 4] = [
        ActiveMetric::Views,
        ActiveMetric::Likes,
        ActiveMetric::Comments,
        ActiveMetric::Engagement,
    ];

    /// Resolve a metric by its key. Unknown keys fall back to views.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "likes" => ActiveMetric::Likes,
            "comments" => ActiveMetric::Comments,
            "engagement" => ActiveMetric::Engagement,
            _ => ActiveMetric::Views,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ActiveMetric::Views => "views",
            ActiveMetric::Likes => "likes",
            ActiveMetric::Comments => "comments",
            ActiveMetric::Engagement => "engagement",
        }
    }
}

impl std::fmt::Display for ActiveMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.key())
    }
}

/// A record that can report a value for each [`ActiveMetric`].
pub trait MetricSource {
    fn metric_value(&self, metric: ActiveMetric) -> u64;
}

impl MetricSource for ContentRecord {
    /// Engagement prefers the source's precomputed figure. Without one it is
    /// the sum of every counter, views included.
    fn metric_value(&self, metric: ActiveMetric) -> u64 {
        match metric {
            ActiveMetric::Views => self.views,
            ActiveMetric::Likes => self.likes,
            ActiveMetric::Comments => self.comments,
            ActiveMetric::Engagement => self
                .engagement
                .unwrap_or_else(|| self.views.saturating_add(self.interaction_total())),
        }
    }
}

impl MetricSource for DailyMetricRecord {
    fn metric_value(&self, metric: ActiveMetric) -> u64 {
        match metric {
            ActiveMetric::Views => self.views,
            ActiveMetric::Likes => self.likes,
            ActiveMetric::Comments => self.comments,
            ActiveMetric::Engagement => self.engagement,
        }
    }
}
