//! Totals, per-content averages and the content-type mix of a collection.

use serde::Serialize;
use trackdash_core::ContentRecord;

use crate::classify::{classify, Category};

/// Collection-wide totals. Engagement is likes + comments + shares + saves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub likes: u64,
    pub comments: u64,
    pub views: u64,
    pub engagement: u64,
}

/// Per-content means of the [`SummaryMetrics`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageMetrics {
    pub likes: f64,
    pub comments: f64,
    pub views: f64,
    pub engagement: f64,
}

/// One bucket of the content-type distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeShare {
    pub category: Category,
    pub count: usize,
    /// Share of the collection rounded to a whole percent. Buckets are rounded
    /// independently, so the column may not add up to exactly 100.
    pub ratio_percent: u32,
}

/// Sum views, likes, comments and engagement over `contents`.
///
/// An empty collection yields all-zero totals. Sums saturate at `u64::MAX`.
#[must_use]
pub fn aggregate_totals(contents: &[ContentRecord]) -> SummaryMetrics {
    contents
        .iter()
        .fold(SummaryMetrics::default(), |acc, content| SummaryMetrics {
            likes: acc.likes.saturating_add(content.likes),
            comments: acc.comments.saturating_add(content.comments),
            views: acc.views.saturating_add(content.views),
            engagement: acc.engagement.saturating_add(content.interaction_total()),
        })
}

/// Mean of each total per content record. `None` for an empty collection.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_metrics(contents: &[ContentRecord]) -> Option<AverageMetrics> {
    if contents.is_empty() {
        return None;
    }
    let totals = aggregate_totals(contents);
    let n = contents.len() as f64;
    Some(AverageMetrics {
        likes: totals.likes as f64 / n,
        comments: totals.comments as f64 / n,
        views: totals.views as f64 / n,
        engagement: totals.engagement as f64 / n,
    })
}

/// Count contents per [`Category`] and express each count as a percentage.
///
/// Buckets are ordered by descending count; equal counts keep the order in
/// which their category was first seen in `contents`. Empty input yields an
/// empty list.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn type_distribution(contents: &[ContentRecord]) -> Vec<TypeShare> {
    if contents.is_empty() {
        return Vec::new();
    }

    // Insertion-ordered so the stable sort below breaks ties by first sighting.
    let mut buckets: Vec<(Category, usize)> = Vec::new();
    for content in contents {
        let category = classify(&content.raw_type);
        match buckets.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => buckets.push((category, 1)),
        }
    }
    buckets.sort_by_key(|&(_, count)| std::cmp::Reverse(count));

    let total = contents.len() as f64;
    buckets
        .into_iter()
        .map(|(category, count)| TypeShare {
            category,
            count,
            ratio_percent: (count as f64 / total * 100.0).round() as u32,
        })
        .collect()
}
